//! Rigid-body world interface.
//!
//! The coordinator drives any engine through this trait. Stepping takes
//! `&mut self` and queries take `&self`, so a world can never be stepped
//! while one of its ray tests is in flight.

use tread_contact::RayCaster;
use tread_math::Pose;
use tread_types::{BodyId, TreadResult};

/// A rigid-body world that can be stepped and ray-tested.
///
/// ```text
/// world.step_simulation(dt)?;   // exclusive
/// world.body_pose(chassis);     // shared, after the step
/// world.ray_test(&ray, &filter) // shared, after the step
/// ```
pub trait RigidBodyWorld: RayCaster {
    /// Advances every body by exactly one fixed step.
    fn step_simulation(&mut self, dt: f32) -> TreadResult<()>;

    /// Current pose of a body, `None` if the world does not know it.
    fn body_pose(&self, body: BodyId) -> Option<Pose>;

    /// Returns the engine name.
    fn name(&self) -> &str;
}
