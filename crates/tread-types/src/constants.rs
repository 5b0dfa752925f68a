//! Simulation defaults and numerical tolerances.

/// Default fixed physics timestep (seconds). 90 Hz.
pub const DEFAULT_DT: f32 = 1.0 / 90.0;

/// Default number of consecutive plane extrapolations allowed before a
/// wheel is forced back through a full collision query.
pub const DEFAULT_REACQUIRE_CAP: u32 = 8;

/// Allowed deviation of a contact normal's length from 1.
pub const UNIT_NORMAL_TOLERANCE: f32 = 1.0e-3;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Largest timestep the coordinator accepts (seconds).
pub const MAX_DT: f32 = 0.25;
