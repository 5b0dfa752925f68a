//! Rigid transform (rotation + translation).

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of a rigid body in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space translation.
    pub position: Vec3,
    /// World-space orientation (unit quaternion).
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// A pose with identity rotation.
    pub fn from_translation(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Maps a body-local point into world space.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.position + self.rotation * p
    }

    /// Rotates a body-local direction into world space.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.rotation * v
    }

    /// Advances the pose by constant linear and angular velocity over `dt`.
    ///
    /// Angular velocity is a world-space axis scaled by rad/s.
    pub fn integrate(&self, linear: Vec3, angular: Vec3, dt: f32) -> Pose {
        let position = self.position + linear * dt;
        let angle = angular.length() * dt;
        let rotation = if angle > 0.0 {
            (Quat::from_axis_angle(angular.normalize(), angle) * self.rotation).normalize()
        } else {
            self.rotation
        };
        Pose { position, rotation }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
