//! Full-query adapter over the rigid-body engine.
//!
//! Orchestrates ray test → patch resolution → surface lookup and turns
//! every failure along the way into "no contact".

use tracing::trace;
use tread_math::{Ray, Vec3};
use tread_surface::SurfaceCatalog;
use tread_types::SurfaceId;

use crate::query::{ContactQuery, ObjectKind, PatchLocator, QueryFilter, QueryHit, RayCaster};

/// Narrow query surface the contact tracker calls when a full query is due.
///
/// Borrows the engine, the locator and the catalog for one query phase.
pub struct CollisionQueryAdapter<'a, C: ?Sized, L: ?Sized> {
    caster: &'a C,
    locator: &'a L,
    catalog: &'a SurfaceCatalog,
    filter: QueryFilter,
}

impl<'a, C, L> CollisionQueryAdapter<'a, C, L>
where
    C: RayCaster + ?Sized,
    L: PatchLocator + ?Sized,
{
    /// Creates an adapter that queries static track geometry only.
    pub fn new(caster: &'a C, locator: &'a L, catalog: &'a SurfaceCatalog) -> Self {
        Self {
            caster,
            locator,
            catalog,
            filter: QueryFilter::track_only(),
        }
    }

    /// Replaces the query filter.
    pub fn with_filter(mut self, filter: QueryFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> &QueryFilter {
        &self.filter
    }
}

impl<C, L> ContactQuery for CollisionQueryAdapter<'_, C, L>
where
    C: RayCaster + ?Sized,
    L: PatchLocator + ?Sized,
{
    fn query(&self, origin: Vec3, direction: Vec3, length: f32) -> Option<QueryHit> {
        let ray = Ray::new(origin, direction, length);
        let hit = self.caster.ray_test(&ray, &self.filter)?;

        // Face the normal toward the query origin.
        let mut normal = hit.normal.try_normalize()?;
        if normal.dot(direction) > 0.0 {
            normal = -normal;
        }
        let distance = hit.distance.clamp(0.0, length);
        let position = origin + direction * distance;

        match hit.kind {
            ObjectKind::Track => {
                let Some(binding) = self.locator.resolve(hit.position, hit.object, hit.primitive)
                else {
                    trace!(object = hit.object.0, primitive = ?hit.primitive, "track hit without patch");
                    return None;
                };
                if self.catalog.lookup(binding.surface).is_none() {
                    trace!(surface = binding.surface.0, patch = binding.patch_id.0, "patch surface not in catalog");
                    return None;
                }
                Some(QueryHit {
                    position,
                    normal,
                    distance,
                    patch_id: Some(binding.patch_id),
                    patch: Some(binding.patch),
                    surface: binding.surface,
                    object: hit.object,
                })
            }
            ObjectKind::Body => Some(QueryHit {
                position,
                normal,
                distance,
                patch_id: None,
                patch: None,
                surface: SurfaceId::NONE,
                object: hit.object,
            }),
        }
    }

    fn name(&self) -> &str {
        "collision_query_adapter"
    }
}
