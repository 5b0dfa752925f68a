//! Track geometry: surface patches and primitive → patch lookup.
//!
//! Patches are installed into the world as one static collision object
//! whose primitive indices follow patch order, so resolving a hit is a
//! single table lookup.

use tread_contact::{PatchBinding, PatchLocator};
use tread_math::Vec3;
use tread_types::constants::EPSILON;
use tread_types::{CollisionObjectId, PatchHandle, PatchId, SurfaceId, TreadError, TreadResult};

use crate::kinematic::KinematicWorld;

/// A unit of track surface with one bound surface descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPatch {
    pub id: PatchId,
    pub surface: SurfaceId,
    pub triangles: Vec<[Vec3; 3]>,
}

/// Owns the track's patches for the lifetime of the loaded track.
#[derive(Debug, Clone, Default)]
pub struct TrackGeometry {
    patches: Vec<TrackPatch>,
    /// Patch handle of every triangle, in install order.
    primitive_patch: Vec<PatchHandle>,
    object: Option<CollisionObjectId>,
}

impl TrackGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a patch made of triangles. Rejects empty and degenerate
    /// patches, and any patch once the geometry is installed.
    pub fn add_patch(
        &mut self,
        id: PatchId,
        surface: SurfaceId,
        triangles: Vec<[Vec3; 3]>,
    ) -> TreadResult<PatchHandle> {
        if let Some(object) = self.object {
            return Err(TreadError::InvalidGeometry(format!(
                "{id}: geometry already installed as object {}",
                object.0
            )));
        }
        if triangles.is_empty() {
            return Err(TreadError::InvalidGeometry(format!("{id} has no triangles")));
        }
        for (i, [a, b, c]) in triangles.iter().enumerate() {
            if (*b - *a).cross(*c - *a).length_squared() < EPSILON {
                return Err(TreadError::InvalidGeometry(format!(
                    "{id}: triangle {i} is degenerate"
                )));
            }
        }
        let handle = PatchHandle(self.patches.len() as u32);
        self.primitive_patch
            .extend(std::iter::repeat(handle).take(triangles.len()));
        self.patches.push(TrackPatch {
            id,
            surface,
            triangles,
        });
        Ok(handle)
    }

    /// Adds a planar quad `a b c d` (counter-clockwise seen from above).
    pub fn add_quad(&mut self, id: PatchId, surface: SurfaceId, corners: [Vec3; 4]) -> TreadResult<PatchHandle> {
        let [a, b, c, d] = corners;
        self.add_patch(id, surface, vec![[a, b, c], [a, c, d]])
    }

    /// Adds an axis-aligned rectangle in the XY plane at height `z`,
    /// optionally sloped along X (`rise` = height gained from `x0` to `x1`).
    #[allow(clippy::too_many_arguments)]
    pub fn add_strip(
        &mut self,
        id: PatchId,
        surface: SurfaceId,
        x0: f32,
        x1: f32,
        half_width: f32,
        z: f32,
        rise: f32,
    ) -> TreadResult<PatchHandle> {
        self.add_quad(
            id,
            surface,
            [
                Vec3::new(x0, -half_width, z),
                Vec3::new(x1, -half_width, z + rise),
                Vec3::new(x1, half_width, z + rise),
                Vec3::new(x0, half_width, z),
            ],
        )
    }

    /// Installs every triangle into `world` as one static object and
    /// binds this geometry's lookups to it. Installs at most once.
    pub fn install(&mut self, world: &mut KinematicWorld) -> TreadResult<CollisionObjectId> {
        if let Some(object) = self.object {
            return Err(TreadError::InvalidGeometry(format!(
                "geometry already installed as object {}",
                object.0
            )));
        }
        let triangles: Vec<[Vec3; 3]> = self
            .patches
            .iter()
            .flat_map(|p| p.triangles.iter().copied())
            .collect();
        let object = world.add_static_triangles(triangles);
        self.object = Some(object);
        Ok(object)
    }

    pub fn patch(&self, handle: PatchHandle) -> Option<&TrackPatch> {
        self.patches.get(handle.index())
    }

    /// Collision object the geometry was installed as.
    pub fn object(&self) -> Option<CollisionObjectId> {
        self.object
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.primitive_patch.len()
    }
}

impl PatchLocator for TrackGeometry {
    fn resolve(
        &self,
        _hit_point: Vec3,
        object: CollisionObjectId,
        primitive: Option<u32>,
    ) -> Option<PatchBinding> {
        if self.object != Some(object) {
            return None;
        }
        let handle = *self.primitive_patch.get(primitive? as usize)?;
        let patch = self.patches.get(handle.index())?;
        Some(PatchBinding {
            patch_id: patch.id,
            patch: handle,
            surface: patch.surface,
        })
    }
}
