//! Surface catalog with built-in track surface presets.
//!
//! Slot 0 always holds the "none" descriptor. Everything else is
//! registered by name, either from the presets below or from a
//! content-authored TOML list.

use std::collections::HashMap;

use serde::Deserialize;
use tread_types::{SurfaceId, TreadError, TreadResult};

use crate::properties::{SurfaceKind, TrackSurface};

/// Owns every surface descriptor of the loaded track content.
#[derive(Debug, Clone)]
pub struct SurfaceCatalog {
    surfaces: Vec<TrackSurface>,
    by_name: HashMap<String, SurfaceId>,
}

/// On-disk layout: a list of `[[surface]]` tables.
#[derive(Debug, Deserialize)]
struct SurfaceFile {
    #[serde(default, rename = "surface")]
    surfaces: Vec<TrackSurface>,
}

impl SurfaceCatalog {
    /// Creates a catalog with only the "none" descriptor.
    pub fn empty() -> Self {
        let none = TrackSurface::none();
        let mut by_name = HashMap::new();
        by_name.insert(none.name.clone(), SurfaceId::NONE);
        Self {
            surfaces: vec![none],
            by_name,
        }
    }

    /// Creates a catalog with one preset per surface kind.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::empty();
        for &kind in SurfaceKind::all() {
            // A handful of presets never exhausts the id space.
            let id = SurfaceId(catalog.surfaces.len() as u16);
            catalog.push(id, preset(kind));
        }
        catalog
    }

    /// Parses a TOML surface list into a new catalog.
    ///
    /// ```toml
    /// [[surface]]
    /// name = "asphalt"
    /// kind = "asphalt"
    /// bump_wave_length = 10.0
    /// bump_amplitude = 0.01
    /// friction_non_tread = 1.0
    /// friction_tread = 0.9
    /// roll_resistance_coefficient = 1.0
    /// rolling_drag = 0.0
    /// ```
    pub fn from_toml_str(text: &str) -> TreadResult<Self> {
        let file: SurfaceFile =
            toml::from_str(text).map_err(|e| TreadError::Serialization(e.to_string()))?;
        let mut catalog = Self::empty();
        for surface in file.surfaces {
            catalog.register(surface)?;
        }
        Ok(catalog)
    }

    /// Registers a surface. Re-registering a name overwrites the
    /// descriptor in place and keeps its id.
    pub fn register(&mut self, surface: TrackSurface) -> TreadResult<SurfaceId> {
        surface.validate()?;
        if surface.is_none() || surface.name == "none" {
            return Err(TreadError::InvalidSurface(format!(
                "'{}': the none surface is built in and cannot be registered",
                surface.name
            )));
        }
        if let Some(&id) = self.by_name.get(&surface.name) {
            self.surfaces[id.index()] = surface;
            return Ok(id);
        }
        let id = u16::try_from(self.surfaces.len())
            .map(SurfaceId)
            .map_err(|_| {
                TreadError::InvalidSurface(format!(
                    "'{}': catalog is full ({} surfaces)",
                    surface.name,
                    self.surfaces.len()
                ))
            })?;
        self.push(id, surface);
        Ok(id)
    }

    fn push(&mut self, id: SurfaceId, surface: TrackSurface) {
        self.by_name.insert(surface.name.clone(), id);
        self.surfaces.push(surface);
    }

    /// Looks up a surface. Returns `None` for ids this catalog never issued.
    pub fn lookup(&self, id: SurfaceId) -> Option<&TrackSurface> {
        self.surfaces.get(id.index())
    }

    /// Looks up a surface, falling back to the "none" descriptor.
    pub fn get(&self, id: SurfaceId) -> &TrackSurface {
        self.lookup(id).unwrap_or_else(|| self.none())
    }

    /// The "no contact" descriptor.
    pub fn none(&self) -> &TrackSurface {
        &self.surfaces[SurfaceId::NONE.index()]
    }

    /// Finds a surface id by name.
    pub fn id_of(&self, name: &str) -> Option<SurfaceId> {
        self.by_name.get(name).copied()
    }

    /// Returns all registered names in id order.
    pub fn names(&self) -> Vec<&str> {
        self.surfaces.iter().map(|s| s.name.as_str()).collect()
    }

    /// Iterates `(id, surface)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &TrackSurface)> {
        self.surfaces
            .iter()
            .enumerate()
            .map(|(i, s)| (SurfaceId(i as u16), s))
    }

    /// Number of descriptors, including "none".
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Always false: the "none" descriptor is always present.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl Default for SurfaceCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Surface Presets ─────────────────────────────────────────

fn preset(kind: SurfaceKind) -> TrackSurface {
    let (wave, amp, non_tread, tread, roll, drag) = match kind {
        SurfaceKind::None => return TrackSurface::none(),
        // Smooth, high grip.
        SurfaceKind::Asphalt => (10.0, 0.0, 1.0, 0.9, 1.0, 0.0),
        // Soft, low grip, noticeable drag.
        SurfaceKind::Grass => (4.0, 0.02, 0.7, 0.6, 1.5, 20.0),
        // Loose, bumpy.
        SurfaceKind::Gravel => (2.0, 0.03, 0.75, 0.65, 2.0, 40.0),
        SurfaceKind::Concrete => (12.0, 0.0, 0.95, 0.85, 1.0, 0.0),
        // Very high drag.
        SurfaceKind::Sand => (3.0, 0.04, 0.6, 0.55, 3.0, 80.0),
        // Short wavelength bumps.
        SurfaceKind::Cobbles => (0.3, 0.015, 0.85, 0.8, 1.2, 5.0),
    };
    TrackSurface {
        name: kind.name().into(),
        kind,
        bump_wave_length: wave,
        bump_amplitude: amp,
        friction_non_tread: non_tread,
        friction_tread: tread,
        roll_resistance_coefficient: roll,
        rolling_drag: drag,
    }
}
