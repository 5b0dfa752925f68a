//! Benchmark scenarios: procedural track + vehicles + config for each case.
//!
//! Three canonical scenarios:
//! 1. **Straight**: One car crossing a single asphalt/grass boundary
//! 2. **Jump**: Ramp, gap and landing; wheels lose and regain contact
//! 3. **Convoy**: Many cars over alternating surfaces, parallel refresh

use serde::{Deserialize, Serialize};

use tread_math::{Pose, Vec3};
use tread_surface::{SurfaceCatalog, SurfaceKind};
use tread_types::{BodyId, PatchId, SurfaceId, TreadError, TreadResult, VehicleId};
use tread_world::{KinematicWorld, SimulationConfig, TrackGeometry, VehicleRig, WorldStepCoordinator};

/// Coordinator over the reference world, as built by [`Scenario::build`].
pub type ScenarioCoordinator = WorldStepCoordinator<KinematicWorld, TrackGeometry>;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// One car, two surfaces, one boundary.
    Straight,
    /// Ramp, gap and landing strip.
    Jump,
    /// Two lanes of cars over alternating surfaces.
    Convoy,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[ScenarioKind::Straight, ScenarioKind::Jump, ScenarioKind::Convoy]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Straight => "straight",
            ScenarioKind::Jump => "jump",
            ScenarioKind::Convoy => "convoy",
        }
    }

    /// Parses a name produced by [`ScenarioKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// Initial state and wheel layout of one benchmark car.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub start: Pose,
    pub velocity: Vec3,
    pub half_base: f32,
    pub half_track: f32,
    /// Wheel ray length (suspension travel plus radius).
    pub ray_length: f32,
}

impl VehicleSpec {
    fn car(x: f32, y: f32, z: f32, speed: f32, ray_length: f32) -> Self {
        Self {
            start: Pose::from_translation(Vec3::new(x, y, z)),
            velocity: Vec3::new(speed, 0.0, 0.0),
            half_base: 1.3,
            half_track: 0.8,
            ray_length,
        }
    }

    /// Four-wheel rig for a chassis body.
    pub fn rig(&self, body: BodyId) -> VehicleRig {
        VehicleRig::four_wheel(body, self.half_base, self.half_track, 0.0, self.ray_length)
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    pub kind: ScenarioKind,
    pub catalog: SurfaceCatalog,
    /// Track patches, installed into a fresh world per run.
    pub geometry: TrackGeometry,
    pub vehicles: Vec<VehicleSpec>,
    /// Config the scenario is tuned for.
    pub config: SimulationConfig,
    /// Number of ticks to simulate.
    pub ticks: u32,
    /// Timestep size (seconds).
    pub dt: f32,
}

impl Scenario {
    /// Straight scenario.
    ///
    /// 120 m of asphalt then 200 m of grass; one car at 30 m/s crosses
    /// the boundary after roughly 3.3 s of a 6.7 s run.
    pub fn straight() -> TreadResult<Self> {
        let catalog = SurfaceCatalog::with_defaults();
        let mut geometry = TrackGeometry::new();
        geometry.add_strip(PatchId(1), surface(&catalog, SurfaceKind::Asphalt)?, -20.0, 100.0, 6.0, 0.0, 0.0)?;
        geometry.add_strip(PatchId(2), surface(&catalog, SurfaceKind::Grass)?, 100.0, 300.0, 6.0, 0.0, 0.0)?;

        Ok(Self {
            kind: ScenarioKind::Straight,
            catalog,
            geometry,
            vehicles: vec![VehicleSpec::car(0.0, 0.0, 0.5, 30.0, 1.0)],
            config: SimulationConfig::default(),
            ticks: 600,
            dt: 1.0 / 90.0,
        })
    }

    /// Jump scenario.
    ///
    /// Flat run-up, a 20 m ramp rising 1.5 m, a 10 m gap with no track
    /// and a concrete landing strip. The chassis moves at constant height
    /// so the wheels miss over the gap and reacquire on landing.
    pub fn jump() -> TreadResult<Self> {
        let catalog = SurfaceCatalog::with_defaults();
        let asphalt = surface(&catalog, SurfaceKind::Asphalt)?;
        let mut geometry = TrackGeometry::new();
        geometry.add_strip(PatchId(1), asphalt, -20.0, 40.0, 6.0, 0.0, 0.0)?;
        geometry.add_strip(PatchId(2), asphalt, 40.0, 60.0, 6.0, 0.0, 1.5)?;
        geometry.add_strip(PatchId(3), surface(&catalog, SurfaceKind::Concrete)?, 70.0, 200.0, 6.0, 0.0, 0.0)?;

        Ok(Self {
            kind: ScenarioKind::Jump,
            catalog,
            geometry,
            vehicles: vec![VehicleSpec::car(0.0, 0.0, 2.5, 25.0, 3.0)],
            config: SimulationConfig::default(),
            ticks: 450,
            dt: 1.0 / 90.0,
        })
    }

    /// Convoy scenario.
    ///
    /// Two lanes of six cars over 25 m patches cycling through asphalt,
    /// gravel, cobbles and sand. Refreshes vehicles in parallel.
    pub fn convoy() -> TreadResult<Self> {
        let catalog = SurfaceCatalog::with_defaults();
        let cycle = [
            surface(&catalog, SurfaceKind::Asphalt)?,
            surface(&catalog, SurfaceKind::Gravel)?,
            surface(&catalog, SurfaceKind::Cobbles)?,
            surface(&catalog, SurfaceKind::Sand)?,
        ];
        let mut geometry = TrackGeometry::new();
        for i in 0..16 {
            let x0 = -50.0 + i as f32 * 25.0;
            geometry.add_strip(PatchId(i + 1), cycle[i as usize % cycle.len()], x0, x0 + 25.0, 8.0, 0.0, 0.0)?;
        }

        let vehicles = (0..12)
            .map(|i| {
                let lane = if i % 2 == 0 { -3.0 } else { 3.0 };
                let x = -(i / 2) as f32 * 8.0;
                VehicleSpec::car(x, lane, 0.5, 20.0 + (i % 3) as f32, 1.0)
            })
            .collect();

        Ok(Self {
            kind: ScenarioKind::Convoy,
            catalog,
            geometry,
            vehicles,
            config: SimulationConfig {
                parallel: true,
                ..Default::default()
            },
            ticks: 900,
            dt: 1.0 / 90.0,
        })
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> TreadResult<Self> {
        match kind {
            ScenarioKind::Straight => Self::straight(),
            ScenarioKind::Jump => Self::jump(),
            ScenarioKind::Convoy => Self::convoy(),
        }
    }

    /// Installs the track into a fresh world and registers every vehicle.
    ///
    /// Returns the coordinator and the vehicle ids in `vehicles` order. A
    /// scenario can be built repeatedly with different configs.
    pub fn build(&self, config: &SimulationConfig) -> TreadResult<(ScenarioCoordinator, Vec<VehicleId>)> {
        let mut world = KinematicWorld::new();
        let mut geometry = self.geometry.clone();
        geometry.install(&mut world)?;

        let mut bodies = Vec::with_capacity(self.vehicles.len());
        for spec in &self.vehicles {
            let body = world.add_body(spec.start);
            world.set_velocity(body, spec.velocity, Vec3::ZERO)?;
            bodies.push(body);
        }

        let mut coordinator =
            WorldStepCoordinator::new(world, geometry, self.catalog.clone(), config.clone())?;
        let mut ids = Vec::with_capacity(bodies.len());
        for (spec, &body) in self.vehicles.iter().zip(&bodies) {
            ids.push(coordinator.add_vehicle(spec.rig(body))?);
        }
        Ok((coordinator, ids))
    }

    /// Total wheel count across all vehicles.
    pub fn wheel_count(&self) -> usize {
        self.vehicles.len() * 4
    }
}

fn surface(catalog: &SurfaceCatalog, kind: SurfaceKind) -> TreadResult<SurfaceId> {
    catalog
        .id_of(kind.name())
        .ok_or_else(|| TreadError::InvalidSurface(format!("no preset for {}", kind.name())))
}
