//! Per-tick telemetry bus.
//!
//! The coordinator emits while it steps the world and refreshes wheels,
//! then calls [`EventBus::flush`] once at the end of the tick. Sinks
//! therefore see a tick's events together and in emission order.

use std::sync::mpsc;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Queues events during a tick and hands them to every sink on flush.
///
/// `emit` takes `&self`, so code that only holds a shared borrow of the
/// coordinator's state can still report.
pub struct EventBus {
    queue_tx: mpsc::Sender<SimulationEvent>,
    queue_rx: mpsc::Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    enabled: bool,
    /// Events handed to sinks since creation.
    dispatched: u64,
}

impl EventBus {
    pub fn new() -> Self {
        let (queue_tx, queue_rx) = mpsc::channel();
        Self {
            queue_tx,
            queue_rx,
            sinks: Vec::new(),
            enabled: true,
            dispatched: 0,
        }
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// While disabled, `emit` drops events. Already queued events still
    /// go out on the next flush.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues an event for the next flush.
    pub fn emit(&self, event: SimulationEvent) {
        if self.enabled {
            // Sender and receiver live and die together.
            let _ = self.queue_tx.send(event);
        }
    }

    /// Hands every queued event to every sink, oldest first.
    ///
    /// Returns how many events went out.
    pub fn flush(&mut self) -> usize {
        let mut count = 0;
        for event in self.queue_rx.try_iter() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            count += 1;
        }
        self.dispatched += count as u64;
        count
    }

    /// Final flush, then lets each sink close out.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Total events dispatched over the bus lifetime.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
