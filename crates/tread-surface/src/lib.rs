//! # tread-surface
//!
//! Track surface descriptors and the catalog that owns them.
//!
//! ## Design
//!
//! A [`TrackSurface`] carries the material parameters the (external)
//! tire model needs at a contact point: friction inside and outside the
//! tread, bump profile and rolling resistance.
//!
//! The [`SurfaceCatalog`] owns every descriptor for the lifetime of the
//! track content. Contact samples refer to descriptors by
//! [`SurfaceId`](tread_types::SurfaceId); slot 0 is always the "none"
//! descriptor, so a lookup through [`SurfaceCatalog::get`] can never fail.

pub mod catalog;
pub mod properties;

pub use catalog::SurfaceCatalog;
pub use properties::{SurfaceKind, TrackSurface};
