//! Strongly-typed identifiers for contact-tracking entities.
//!
//! Contact samples never own the things they point at. Every reference
//! into track content or the rigid-body engine is one of these handles,
//! resolved against the owning table when needed.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Authoring identity of a track surface patch.
///
/// Stable across ticks while a wheel stays on the same patch, so a change
/// in `PatchId` marks a patch transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatchId(pub i32);

/// Index into the track geometry's patch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatchHandle(pub u32);

/// Index into the surface catalog.
///
/// `SurfaceId::NONE` is the built-in "no contact" descriptor; every
/// catalog carries it, so a `SurfaceId` is never dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u16);

/// Handle of a collision object inside the rigid-body engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollisionObjectId(pub u32);

/// Handle of a rigid body inside the rigid-body engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Handle of a vehicle registered with the step coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VehicleId(pub u32);

impl SurfaceId {
    /// The "no contact" surface.
    pub const NONE: SurfaceId = SurfaceId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true for the "no contact" surface.
    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl PatchHandle {
    /// Returns the raw index as `usize` for table indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for PatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatchId({})", self.0)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl From<i32> for PatchId {
    fn from(val: i32) -> Self {
        Self(val)
    }
}

impl From<u16> for SurfaceId {
    fn from(val: u16) -> Self {
        Self(val)
    }
}
