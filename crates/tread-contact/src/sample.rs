//! Contact sample data type.
//!
//! `ContactSample` is the per-wheel result handed to the tire model:
//! where the wheel ray meets the ground, which way the ground faces,
//! and what it is made of.

use serde::{Deserialize, Serialize};
use tread_math::Vec3;
use tread_types::constants::UNIT_NORMAL_TOLERANCE;
use tread_types::{CollisionObjectId, PatchHandle, PatchId, SurfaceId};

use crate::query::QueryHit;

/// The most recent ground contact of one wheel.
///
/// Patch, surface and object fields are non-owning handles into the
/// track geometry, the surface catalog and the rigid-body engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSample {
    position: Vec3,
    normal: Vec3,
    depth: f32,
    patch_id: Option<PatchId>,
    patch: Option<PatchHandle>,
    surface: SurfaceId,
    object: Option<CollisionObjectId>,
}

impl ContactSample {
    /// Creates a sample from full-query data.
    ///
    /// `normal` must be unit length and `depth` non-negative.
    pub fn new(
        position: Vec3,
        normal: Vec3,
        depth: f32,
        patch_id: Option<PatchId>,
        patch: Option<PatchHandle>,
        surface: SurfaceId,
        object: Option<CollisionObjectId>,
    ) -> Self {
        debug_assert!(
            (normal.length() - 1.0).abs() <= UNIT_NORMAL_TOLERANCE,
            "contact normal must be unit length, got {normal:?}"
        );
        debug_assert!(depth >= 0.0, "contact depth must be non-negative, got {depth}");
        Self {
            position,
            normal,
            depth,
            patch_id,
            patch,
            surface,
            object,
        }
    }

    /// The "no contact" sample for a ray that hit nothing: position at the
    /// ray end, `depth = length`, normal facing back along the ray, and the
    /// none surface.
    pub fn no_contact(origin: Vec3, direction: Vec3, length: f32) -> Self {
        Self {
            position: origin + direction * length,
            normal: -direction,
            depth: length,
            patch_id: None,
            patch: None,
            surface: SurfaceId::NONE,
            object: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Ray-parametric distance from the query origin to `position`.
    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn patch_id(&self) -> Option<PatchId> {
        self.patch_id
    }

    pub fn patch(&self) -> Option<PatchHandle> {
        self.patch
    }

    /// Surface descriptor handle. Never absent.
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn object(&self) -> Option<CollisionObjectId> {
        self.object
    }

    /// True when the last full query struck something.
    pub fn is_grounded(&self) -> bool {
        self.object.is_some()
    }

    /// Moves the sample along the stored contact plane to the new wheel ray.
    ///
    /// While the ray still points into the front side of the plane
    /// (`normal · direction < 0`), the plane crossing becomes the new
    /// position and `true` is returned. Otherwise the position is parked
    /// at the ray end with `depth = length` and `false` tells the caller a
    /// full query is needed. Only `position` and `depth` change.
    ///
    /// A crossing behind the origin reports `depth = 0`.
    pub fn cast_ray(&mut self, origin: Vec3, direction: Vec3, length: f32) -> bool {
        let nd = self.normal.dot(direction);
        if nd < 0.0 {
            let t = self.normal.dot(self.position - origin) / nd;
            self.position = origin + direction * t;
            self.depth = t.max(0.0);
            return true;
        }
        self.position = origin + direction * length;
        self.depth = length;
        false
    }
}

impl Default for ContactSample {
    /// Position at the origin, `+Z` normal, zero depth, none surface.
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            normal: Vec3::Z,
            depth: 0.0,
            patch_id: None,
            patch: None,
            surface: SurfaceId::NONE,
            object: None,
        }
    }
}

impl From<&QueryHit> for ContactSample {
    fn from(hit: &QueryHit) -> Self {
        Self::new(
            hit.position,
            hit.normal,
            hit.distance,
            hit.patch_id,
            hit.patch,
            hit.surface,
            Some(hit.object),
        )
    }
}
