//! # tread-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (tick timing, contact refresh counts, patch transitions) that can be
//! consumed by pluggable sinks (tracing, in-memory buffers).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
