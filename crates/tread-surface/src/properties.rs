//! Physical track surface properties.

use serde::{Deserialize, Serialize};
use tread_types::{TreadError, TreadResult};

/// Broad classification of a surface, used by effects and AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// No surface (wheel in the air).
    #[default]
    None,
    Asphalt,
    Grass,
    Gravel,
    Concrete,
    Sand,
    Cobbles,
}

impl SurfaceKind {
    /// Returns all non-`None` kinds.
    pub fn all() -> &'static [SurfaceKind] {
        &[
            SurfaceKind::Asphalt,
            SurfaceKind::Grass,
            SurfaceKind::Gravel,
            SurfaceKind::Concrete,
            SurfaceKind::Sand,
            SurfaceKind::Cobbles,
        ]
    }

    /// Returns a lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceKind::None => "none",
            SurfaceKind::Asphalt => "asphalt",
            SurfaceKind::Grass => "grass",
            SurfaceKind::Gravel => "gravel",
            SurfaceKind::Concrete => "concrete",
            SurfaceKind::Sand => "sand",
            SurfaceKind::Cobbles => "cobbles",
        }
    }
}

/// Material properties of a track surface.
///
/// | Group | Fields |
/// |---|---|
/// | Grip | `friction_tread`, `friction_non_tread` |
/// | Roughness | `bump_wave_length`, `bump_amplitude` |
/// | Rolling resistance | `roll_resistance_coefficient`, `rolling_drag` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSurface {
    /// Unique name within a catalog (e.g. "asphalt_dry").
    pub name: String,

    /// Surface classification. Required in content files; `none` is
    /// reserved for the built-in descriptor.
    pub kind: SurfaceKind,

    /// Wavelength of the surface bump profile (m). Must be positive.
    pub bump_wave_length: f32,

    /// Amplitude of the surface bump profile (m).
    pub bump_amplitude: f32,

    /// Friction coefficient for the non-tread part of the tire.
    pub friction_non_tread: f32,

    /// Friction coefficient for the tread part of the tire.
    pub friction_tread: f32,

    /// Rolling resistance coefficient.
    pub roll_resistance_coefficient: f32,

    /// Speed-proportional rolling drag.
    pub rolling_drag: f32,
}

impl TrackSurface {
    /// The "no contact" descriptor: zero grip, zero resistance.
    pub fn none() -> Self {
        Self {
            name: "none".into(),
            kind: SurfaceKind::None,
            bump_wave_length: 1.0,
            bump_amplitude: 0.0,
            friction_non_tread: 0.0,
            friction_tread: 0.0,
            roll_resistance_coefficient: 0.0,
            rolling_drag: 0.0,
        }
    }

    /// Returns true for the "no contact" descriptor.
    pub fn is_none(&self) -> bool {
        self.kind == SurfaceKind::None
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> TreadResult<()> {
        if self.name.is_empty() {
            return Err(TreadError::InvalidSurface("surface name is empty".into()));
        }
        if self.bump_wave_length.is_nan() || self.bump_wave_length <= 0.0 {
            return Err(TreadError::InvalidSurface(format!(
                "'{}': bump_wave_length must be positive, got {}",
                self.name, self.bump_wave_length
            )));
        }
        let non_negative = [
            ("bump_amplitude", self.bump_amplitude),
            ("friction_non_tread", self.friction_non_tread),
            ("friction_tread", self.friction_tread),
            ("roll_resistance_coefficient", self.roll_resistance_coefficient),
            ("rolling_drag", self.rolling_drag),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(TreadError::InvalidSurface(format!(
                    "'{}': {field} must be non-negative, got {value}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

impl Default for TrackSurface {
    fn default() -> Self {
        Self::none()
    }
}
