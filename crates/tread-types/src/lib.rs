//! # tread-types
//!
//! Shared types, identifiers, error types, and constants for the
//! tread wheel/ground contact tracker.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other tread crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{TreadError, TreadResult};
pub use ids::{BodyId, CollisionObjectId, PatchHandle, PatchId, SurfaceId, VehicleId};
