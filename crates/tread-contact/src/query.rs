//! Collision query interfaces.
//!
//! The tracker never talks to the rigid-body engine directly. It sees a
//! [`ContactQuery`]; the adapter behind it sees a [`RayCaster`] and a
//! [`PatchLocator`].

use serde::{Deserialize, Serialize};
use tread_math::{Ray, Vec3};
use tread_types::{CollisionObjectId, PatchHandle, PatchId, SurfaceId};

/// What kind of collision object a ray struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Static track collision geometry.
    Track,
    /// A dynamic body (another vehicle, debris).
    Body,
}

/// Raw hit reported by the rigid-body engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub position: Vec3,
    /// Surface normal as reported by the engine (may be unnormalized or back-facing).
    pub normal: Vec3,
    /// Distance along the ray.
    pub distance: f32,
    pub object: CollisionObjectId,
    pub kind: ObjectKind,
    /// Index of the struck primitive within `object`, if the shape has primitives.
    pub primitive: Option<u32>,
}

/// Which objects a ray test may hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryFilter {
    /// Whether dynamic bodies participate (vehicle–vehicle contact).
    pub include_bodies: bool,
    /// An object to skip, normally the querying vehicle's own chassis.
    pub exclude: Option<CollisionObjectId>,
}

impl QueryFilter {
    /// Static track geometry only.
    pub fn track_only() -> Self {
        Self::default()
    }

    /// Returns true if a hit on `object` of `kind` passes this filter.
    pub fn accepts(&self, object: CollisionObjectId, kind: ObjectKind) -> bool {
        if self.exclude == Some(object) {
            return false;
        }
        match kind {
            ObjectKind::Track => true,
            ObjectKind::Body => self.include_bodies,
        }
    }
}

/// Ray test surface of the rigid-body engine.
///
/// Implementations must only be read during the query phase of a tick;
/// the engine is never stepped while a ray test is in flight.
pub trait RayCaster: Send + Sync {
    /// Returns the nearest hit along `ray` that passes `filter`.
    fn ray_test(&self, ray: &Ray, filter: &QueryFilter) -> Option<RayHit>;
}

/// Patch and surface bound to a struck track primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchBinding {
    pub patch_id: PatchId,
    pub patch: PatchHandle,
    pub surface: SurfaceId,
}

/// Resolves a track hit to the geometry patch it lies on.
pub trait PatchLocator: Send + Sync {
    /// Returns `None` for geometry without bound patch metadata.
    fn resolve(
        &self,
        hit_point: Vec3,
        object: CollisionObjectId,
        primitive: Option<u32>,
    ) -> Option<PatchBinding>;
}

/// Fully resolved result of a full contact query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryHit {
    pub position: Vec3,
    /// Unit normal facing the query origin.
    pub normal: Vec3,
    /// Distance along the ray, within `[0, length]`.
    pub distance: f32,
    pub patch_id: Option<PatchId>,
    pub patch: Option<PatchHandle>,
    pub surface: SurfaceId,
    pub object: CollisionObjectId,
}

/// Source of full contact queries for a [`ContactTracker`](crate::ContactTracker).
pub trait ContactQuery: Sync {
    /// Casts the wheel ray and resolves what it hits. `None` means no contact.
    fn query(&self, origin: Vec3, direction: Vec3, length: f32) -> Option<QueryHit>;

    /// Returns the query source name.
    fn name(&self) -> &str;
}

/// Query source with no geometry at all.
pub struct NullQuery;

impl ContactQuery for NullQuery {
    fn query(&self, _origin: Vec3, _direction: Vec3, _length: f32) -> Option<QueryHit> {
        None
    }

    fn name(&self) -> &str {
        "null_query"
    }
}
