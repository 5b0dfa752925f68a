//! # tread-math
//!
//! Geometry primitives for the tread contact tracker.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Quat`, etc.)
//! - [`Ray`] with plane, triangle and sphere intersection
//! - [`Pose`], a rigid transform for chassis and body placement

pub mod pose;
pub mod ray;

pub use pose::Pose;
pub use ray::{Ray, TriangleHit};

// Re-export glam types as the canonical math types for tread.
pub use glam::{Mat3, Quat, Vec3};
