//! World step coordinator: one fixed step, then every wheel refreshed.
//!
//! Each call to [`WorldStepCoordinator::advance`] runs two phases:
//!
//! ```text
//! world.step_simulation(dt)?;        // &mut world
//! for vehicle in insertion order {   // &world
//!     for wheel in index order {
//!         tracker.update(adapter, ray)
//!     }
//! }
//! ```
//!
//! The second phase only borrows the world immutably, so samples always
//! reflect post-step poses. With `parallel` set, vehicles refresh on the
//! rayon pool and are gathered back in insertion order before any event
//! is emitted.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tread_contact::{ContactSample, PatchLocator};
use tread_surface::{SurfaceCatalog, TrackSurface};
use tread_telemetry::{EventBus, EventKind, SimulationEvent};
use tread_types::constants::MAX_DT;
use tread_types::{TreadError, TreadResult, VehicleId};

use crate::config::SimulationConfig;
use crate::vehicle::{VehicleEntry, VehicleRefresh, VehicleRig, WheelContact};
use crate::world::RigidBodyWorld;

/// Summary of one `advance` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Frame number of this tick (frames completed before it).
    pub frame: u64,
    /// Simulation time after the tick (seconds).
    pub sim_time: f64,
    pub full_queries: u32,
    pub extrapolations: u32,
    pub misses: u32,
    /// Wheels touching a collision object after the refresh.
    pub grounded_wheels: u32,
    pub patch_transitions: u32,
    /// Wall-clock time for step plus refresh (seconds).
    pub wall_time: f64,
}

/// Owns the world, the track content and every vehicle's wheel trackers.
pub struct WorldStepCoordinator<W: RigidBodyWorld, L: PatchLocator> {
    world: W,
    locator: L,
    catalog: SurfaceCatalog,
    config: SimulationConfig,
    vehicles: Vec<VehicleEntry>,
    next_vehicle: u32,
    frame: u64,
    sim_time: f64,
    paused: bool,
    bus: EventBus,
}

impl<W: RigidBodyWorld, L: PatchLocator> WorldStepCoordinator<W, L> {
    /// Creates a coordinator. Fails if the config does not validate.
    pub fn new(world: W, locator: L, catalog: SurfaceCatalog, config: SimulationConfig) -> TreadResult<Self> {
        config.validate()?;
        let mut bus = EventBus::new();
        bus.set_enabled(config.telemetry);
        Ok(Self {
            world,
            locator,
            catalog,
            config,
            vehicles: Vec::new(),
            next_vehicle: 0,
            frame: 0,
            sim_time: 0.0,
            paused: false,
            bus,
        })
    }

    /// Steps the world once by `dt`, then refreshes every wheel contact.
    pub fn advance(&mut self, dt: f32) -> TreadResult<StepReport> {
        if !dt.is_finite() || dt <= 0.0 || dt > MAX_DT {
            return Err(TreadError::InvalidTimestep { dt });
        }
        if self.paused {
            debug!(frame = self.frame, "paused, skipping tick");
            return Ok(StepReport {
                frame: self.frame,
                sim_time: self.sim_time,
                ..Default::default()
            });
        }

        let start = Instant::now();
        let tick = self.frame;

        // A failed step leaves no trace on the bus or the clock.
        self.world.step_simulation(dt)?;
        self.bus.emit(SimulationEvent::new(
            tick,
            EventKind::TickBegin {
                dt,
                sim_time: self.sim_time,
            },
        ));
        self.sim_time += dt as f64;

        let refreshes = self.refresh_vehicles();

        let mut report = StepReport {
            frame: tick,
            ..Default::default()
        };
        for refresh in &refreshes {
            report.full_queries += refresh.full_queries;
            report.extrapolations += refresh.extrapolations;
            report.misses += refresh.misses;
            report.grounded_wheels += refresh.grounded;
            report.patch_transitions += refresh.transitions.len() as u32;

            let Some(vehicle) = refresh.vehicle else {
                continue;
            };
            self.bus.emit(SimulationEvent::new(
                tick,
                EventKind::ContactRefresh {
                    vehicle,
                    full_queries: refresh.full_queries,
                    extrapolations: refresh.extrapolations,
                    grounded: refresh.grounded,
                },
            ));
            for &(wheel, from, to) in &refresh.transitions {
                self.bus.emit(SimulationEvent::new(
                    tick,
                    EventKind::PatchTransition {
                        vehicle,
                        wheel,
                        from,
                        to,
                    },
                ));
            }
        }

        self.frame += 1;
        report.sim_time = self.sim_time;
        report.wall_time = start.elapsed().as_secs_f64();
        self.bus.emit(SimulationEvent::new(
            tick,
            EventKind::TickEnd {
                wall_time: report.wall_time,
            },
        ));
        self.bus.flush();

        Ok(report)
    }

    /// Advances by the configured fixed timestep.
    pub fn advance_fixed(&mut self) -> TreadResult<StepReport> {
        self.advance(self.config.fixed_dt)
    }

    fn refresh_vehicles(&mut self) -> Vec<VehicleRefresh> {
        let world = &self.world;
        let locator = &self.locator;
        let catalog = &self.catalog;
        let include_bodies = self.config.include_vehicles;

        if self.config.parallel {
            self.vehicles
                .par_iter_mut()
                .filter_map(|v| v.refresh(world, locator, catalog, include_bodies))
                .collect()
        } else {
            self.vehicles
                .iter_mut()
                .filter_map(|v| v.refresh(world, locator, catalog, include_bodies))
                .collect()
        }
    }

    // ─── Vehicles ────────────────────────────────────────────

    /// Registers a vehicle. Its trackers start uninitialized and run a full
    /// query on the next tick.
    pub fn add_vehicle(&mut self, rig: VehicleRig) -> TreadResult<VehicleId> {
        rig.validate()?;
        let id = VehicleId(self.next_vehicle);
        self.next_vehicle += 1;
        debug!(vehicle = id.0, wheels = rig.wheels.len(), body = rig.body.0, "vehicle added");
        self.vehicles
            .push(VehicleEntry::new(id, rig, self.config.reacquire_policy()));
        Ok(id)
    }

    pub fn remove_vehicle(&mut self, id: VehicleId) -> TreadResult<()> {
        let index = self
            .vehicles
            .iter()
            .position(|v| v.id == id)
            .ok_or(TreadError::UnknownVehicle(id.0))?;
        self.vehicles.remove(index);
        debug!(vehicle = id.0, "vehicle removed");
        Ok(())
    }

    /// Inactive vehicles keep their last samples and are not refreshed.
    pub fn set_active(&mut self, id: VehicleId, active: bool) -> TreadResult<()> {
        self.entry_mut(id)?.active = active;
        Ok(())
    }

    /// Forces a full query on every wheel of `id` at the next tick.
    pub fn reset_vehicle(&mut self, id: VehicleId) -> TreadResult<()> {
        self.entry_mut(id)?.request_refresh();
        debug!(vehicle = id.0, "vehicle reset, full queries forced");
        Ok(())
    }

    fn entry(&self, id: VehicleId) -> Option<&VehicleEntry> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    fn entry_mut(&mut self, id: VehicleId) -> TreadResult<&mut VehicleEntry> {
        self.vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(TreadError::UnknownVehicle(id.0))
    }

    /// Vehicle ids in insertion (refresh) order.
    pub fn vehicle_ids(&self) -> Vec<VehicleId> {
        self.vehicles.iter().map(|v| v.id).collect()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_active(&self, id: VehicleId) -> Option<bool> {
        self.entry(id).map(|v| v.active)
    }

    pub fn rig(&self, id: VehicleId) -> Option<&VehicleRig> {
        self.entry(id).map(|v| &v.rig)
    }

    // ─── Contacts ────────────────────────────────────────────

    /// All wheels of a vehicle, in wheel index order.
    pub fn contacts(&self, id: VehicleId) -> Option<&[WheelContact]> {
        self.entry(id).map(|v| v.wheels.as_slice())
    }

    pub fn wheel_contact(&self, id: VehicleId, wheel: usize) -> Option<&ContactSample> {
        self.entry(id)?.wheels.get(wheel).map(WheelContact::sample)
    }

    /// Surface descriptor for a sample. Never fails: unknown ids resolve to
    /// the none descriptor.
    pub fn surface(&self, sample: &ContactSample) -> &TrackSurface {
        self.catalog.get(sample.surface())
    }

    // ─── State ───────────────────────────────────────────────

    /// Number of ticks completed.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Accumulated simulation time (seconds).
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replaces the config. The new reacquisition cap applies to every
    /// existing tracker from the next tick on.
    pub fn set_config(&mut self, config: SimulationConfig) -> TreadResult<()> {
        config.validate()?;
        let policy = config.reacquire_policy();
        for vehicle in &mut self.vehicles {
            vehicle.set_policy(policy);
        }
        self.bus.set_enabled(config.telemetry);
        self.config = config;
        Ok(())
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable world access between ticks (teleports, velocity changes).
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn catalog(&self) -> &SurfaceCatalog {
        &self.catalog
    }

    pub fn event_bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }
}
