//! Simulation configuration.
//!
//! Parameters that control how often wheels fall back to full collision
//! queries and which bodies those queries see.

use serde::{Deserialize, Serialize};
use tread_contact::ReacquirePolicy;
use tread_types::constants::{DEFAULT_DT, DEFAULT_REACQUIRE_CAP, MAX_DT};
use tread_types::{TreadError, TreadResult};

/// Configuration for the world step coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed physics timestep (seconds).
    pub fixed_dt: f32,

    /// Consecutive plane extrapolations allowed per wheel before a full
    /// query is forced. Zero queries every tick.
    pub reacquire_cap: u32,

    /// Whether full queries may hit other vehicles' bodies.
    pub include_vehicles: bool,

    /// Refresh vehicles in parallel (rayon fork-join per tick).
    pub parallel: bool,

    /// Emit telemetry events on the coordinator's bus.
    pub telemetry: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_dt: DEFAULT_DT,
            reacquire_cap: DEFAULT_REACQUIRE_CAP,
            include_vehicles: false,
            parallel: false,
            telemetry: true,
        }
    }
}

impl SimulationConfig {
    /// Full query on every tick. No extrapolation error at all.
    pub fn precise() -> Self {
        Self {
            reacquire_cap: 0,
            ..Default::default()
        }
    }

    /// Long extrapolation runs, parallel refresh.
    pub fn fast() -> Self {
        Self {
            reacquire_cap: 32,
            parallel: true,
            ..Default::default()
        }
    }

    /// Parses a TOML document. Missing keys take their default.
    pub fn from_toml_str(text: &str) -> TreadResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| TreadError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> TreadResult<()> {
        if !self.fixed_dt.is_finite() || self.fixed_dt <= 0.0 {
            return Err(TreadError::InvalidConfig(
                "fixed_dt must be positive".into(),
            ));
        }
        if self.fixed_dt > MAX_DT {
            return Err(TreadError::InvalidConfig(format!(
                "fixed_dt {} exceeds the maximum of {MAX_DT}",
                self.fixed_dt
            )));
        }
        Ok(())
    }

    /// Tracker policy derived from this config.
    pub fn reacquire_policy(&self) -> ReacquirePolicy {
        ReacquirePolicy {
            max_run_length: self.reacquire_cap,
        }
    }
}
