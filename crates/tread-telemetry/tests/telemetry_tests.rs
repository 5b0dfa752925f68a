//! Integration tests for tread-telemetry.

use tread_telemetry::bus::EventBus;
use tread_telemetry::events::{EventKind, SimulationEvent};
use tread_telemetry::sinks::{EventSink, TracingSink, VecSink};
use tread_types::{PatchId, VehicleId};

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(SimulationEvent::new(0, EventKind::TickBegin { dt: 0.01, sim_time: 0.0 }));
    bus.emit(SimulationEvent::new(0, EventKind::TickEnd { wall_time: 0.001 }));

    assert!(sink.is_empty());
    assert_eq!(bus.flush(), 2);
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0].kind, EventKind::TickBegin { .. }));
}

#[test]
fn dispatched_counts_across_flushes() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));
    assert_eq!(bus.dispatched(), 0);

    bus.emit(SimulationEvent::new(0, EventKind::TickEnd { wall_time: 0.0 }));
    bus.flush();
    bus.emit(SimulationEvent::new(1, EventKind::TickEnd { wall_time: 0.0 }));
    bus.emit(SimulationEvent::new(1, EventKind::TickEnd { wall_time: 0.0 }));
    bus.flush();
    assert_eq!(bus.flush(), 0);
    assert_eq!(bus.dispatched(), 3);
}

#[test]
fn queued_events_survive_disable() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.emit(SimulationEvent::new(0, EventKind::TickEnd { wall_time: 0.0 }));
    bus.set_enabled(false);
    bus.emit(SimulationEvent::new(1, EventKind::TickEnd { wall_time: 0.0 }));
    assert_eq!(bus.flush(), 1);
    assert_eq!(sink.events()[0].tick, 0);
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(SimulationEvent::new(0, EventKind::TickBegin { dt: 0.01, sim_time: 0.0 }));
    assert_eq!(bus.flush(), 0);
    assert!(sink.is_empty());
}

#[test]
fn multiple_sinks_receive_everything() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    bus.add_sink(Box::new(TracingSink::default()));
    assert_eq!(bus.sink_count(), 3);

    bus.emit(SimulationEvent::new(3, EventKind::TickEnd { wall_time: 0.0 }));
    bus.finalize();
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
}

#[test]
fn sink_names() {
    assert_eq!(VecSink::new().name(), "vec_sink");
    assert_eq!(TracingSink::new(tracing::Level::INFO).name(), "tracing_sink");
}

#[test]
fn patch_transition_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::PatchTransition {
            vehicle: VehicleId(1),
            wheel: 2,
            from: Some(PatchId(10)),
            to: None,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn contact_refresh_event() {
    let event = SimulationEvent::new(
        10,
        EventKind::ContactRefresh {
            vehicle: VehicleId(0),
            full_queries: 1,
            extrapolations: 3,
            grounded: 4,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("extrapolations"));
}
