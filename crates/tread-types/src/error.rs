//! Error types for tread.
//!
//! All crates return `TreadResult<T>` from fallible operations. Missing
//! contacts are data, not errors; these variants cover misuse and
//! malformed input only.

use thiserror::Error;

/// Unified error type for tread.
#[derive(Debug, Error)]
pub enum TreadError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The coordinator was asked to advance by a non-finite, zero or negative step.
    #[error("Invalid timestep: {dt}")]
    InvalidTimestep {
        dt: f32,
    },

    /// A vehicle wheel rig is malformed (no wheels, bad ray).
    #[error("Invalid vehicle rig: {0}")]
    InvalidRig(String),

    /// A surface descriptor has out-of-range parameters.
    #[error("Invalid surface: {0}")]
    InvalidSurface(String),

    /// Track geometry is malformed (degenerate patch, empty patch).
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The vehicle handle does not name a registered vehicle.
    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(u32),

    /// The external rigid-body world reported a failure while stepping.
    #[error("World error: {0}")]
    World(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, TreadError>`.
pub type TreadResult<T> = Result<T, TreadError>;
