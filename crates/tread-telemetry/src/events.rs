//! Simulation event types.
//!
//! Lightweight value types emitted by the step coordinator once per
//! tick, carrying just enough data for monitoring and debugging.

use serde::{Deserialize, Serialize};
use tread_types::{PatchId, VehicleId};

/// A simulation event tagged with the physics frame it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Physics frame number (0-indexed).
    pub tick: u64,
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// World step succeeded; contact refresh follows.
    TickBegin {
        /// Timestep (seconds).
        dt: f32,
        /// Simulation time before the step (seconds).
        sim_time: f64,
    },

    /// Step and contact refresh completed.
    TickEnd {
        /// Wall-clock time for the whole tick (seconds).
        wall_time: f64,
    },

    /// All wheels of one vehicle were refreshed.
    ContactRefresh {
        vehicle: VehicleId,
        /// Wheels that ran a full query this tick.
        full_queries: u32,
        /// Wheels served by plane extrapolation.
        extrapolations: u32,
        /// Wheels whose sample references a collision object.
        grounded: u32,
    },

    /// A wheel's contact moved to a different track patch.
    PatchTransition {
        vehicle: VehicleId,
        wheel: u32,
        from: Option<PatchId>,
        to: Option<PatchId>,
    },

    /// Custom event for extensibility.
    Custom {
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given tick.
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
