//! # tread-contact
//!
//! Wheel/ground contact tracking.
//!
//! Each wheel owns a [`ContactTracker`] holding its most recent
//! [`ContactSample`]. On most ticks the tracker extrapolates the sample
//! along the contact plane from the last full query; periodically, or
//! when the plane no longer faces the wheel ray, it issues a full query
//! through a [`ContactQuery`] source, normally a
//! [`CollisionQueryAdapter`] over the rigid-body engine.
//!
//! The engine and track content sit behind two narrow traits:
//! 1. [`RayCaster`]: ray test against world collision geometry
//! 2. [`PatchLocator`]: maps a struck primitive to a patch and surface

pub mod adapter;
pub mod query;
pub mod sample;
pub mod tracker;

pub use adapter::CollisionQueryAdapter;
pub use query::{
    ContactQuery, NullQuery, ObjectKind, PatchBinding, PatchLocator, QueryFilter, QueryHit,
    RayCaster, RayHit,
};
pub use sample::ContactSample;
pub use tracker::{ContactTracker, ReacquirePolicy, TrackerState, TrackerStats, UpdateOutcome};
