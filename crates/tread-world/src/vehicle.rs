//! Vehicle wheel rigs and their per-wheel trackers.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use tread_contact::{
    CollisionQueryAdapter, ContactSample, ContactTracker, PatchLocator, QueryFilter,
    ReacquirePolicy, UpdateOutcome,
};
use tread_math::{Pose, Vec3};
use tread_surface::SurfaceCatalog;
use tread_types::constants::UNIT_NORMAL_TOLERANCE;
use tread_types::{BodyId, CollisionObjectId, PatchId, TreadError, TreadResult, VehicleId};

use crate::world::RigidBodyWorld;

/// Where a wheel's contact ray starts and where it points, in chassis space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelMount {
    /// Ray origin in chassis space (top of suspension travel).
    pub position: Vec3,
    /// Unit ray direction in chassis space (down the suspension axis).
    pub direction: Vec3,
    /// Ray length: suspension travel plus wheel radius.
    pub length: f32,
}

impl WheelMount {
    pub fn new(position: Vec3, direction: Vec3, length: f32) -> Self {
        Self {
            position,
            direction,
            length,
        }
    }

    /// World-space ray origin and direction for a chassis pose.
    pub fn world_ray(&self, pose: &Pose) -> (Vec3, Vec3) {
        (
            pose.transform_point(self.position),
            pose.transform_vector(self.direction),
        )
    }
}

/// Static description of a vehicle for the coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRig {
    /// Chassis body in the rigid-body world.
    pub body: BodyId,
    /// Chassis collision object, excluded from this vehicle's own queries.
    pub chassis_object: Option<CollisionObjectId>,
    /// Wheel mounts in wheel index order.
    pub wheels: Vec<WheelMount>,
}

impl VehicleRig {
    /// Four wheels at `(±half_base, ±half_track, height)` casting along `-Z`.
    ///
    /// Wheel order: front-left, front-right, rear-left, rear-right.
    pub fn four_wheel(body: BodyId, half_base: f32, half_track: f32, height: f32, length: f32) -> Self {
        let mount = |x: f32, y: f32| WheelMount::new(Vec3::new(x, y, height), Vec3::NEG_Z, length);
        Self {
            body,
            chassis_object: None,
            wheels: vec![
                mount(half_base, half_track),
                mount(half_base, -half_track),
                mount(-half_base, half_track),
                mount(-half_base, -half_track),
            ],
        }
    }

    pub fn with_chassis_object(mut self, object: CollisionObjectId) -> Self {
        self.chassis_object = Some(object);
        self
    }

    /// Checks wheel count, ray lengths and direction normalization.
    pub fn validate(&self) -> TreadResult<()> {
        if self.wheels.is_empty() {
            return Err(TreadError::InvalidRig("vehicle has no wheels".into()));
        }
        for (i, wheel) in self.wheels.iter().enumerate() {
            if !wheel.length.is_finite() || wheel.length <= 0.0 {
                return Err(TreadError::InvalidRig(format!(
                    "wheel {i} ray length must be positive, got {}",
                    wheel.length
                )));
            }
            if (wheel.direction.length() - 1.0).abs() > UNIT_NORMAL_TOLERANCE {
                return Err(TreadError::InvalidRig(format!(
                    "wheel {i} direction must be unit length, got {:?}",
                    wheel.direction
                )));
            }
            if !wheel.position.is_finite() {
                return Err(TreadError::InvalidRig(format!("wheel {i} position is not finite")));
            }
        }
        Ok(())
    }
}

/// One wheel: its mount and its live contact tracker.
#[derive(Debug, Clone)]
pub struct WheelContact {
    mount: WheelMount,
    tracker: ContactTracker,
}

impl WheelContact {
    pub fn mount(&self) -> &WheelMount {
        &self.mount
    }

    pub fn tracker(&self) -> &ContactTracker {
        &self.tracker
    }

    /// The wheel's current contact sample.
    pub fn sample(&self) -> &ContactSample {
        self.tracker.current()
    }
}

/// Per-vehicle result of one refresh pass.
#[derive(Debug, Clone, Default)]
pub(crate) struct VehicleRefresh {
    pub vehicle: Option<VehicleId>,
    pub full_queries: u32,
    pub extrapolations: u32,
    pub misses: u32,
    pub grounded: u32,
    /// `(wheel, from, to)` for wheels whose patch changed.
    pub transitions: Vec<(u32, Option<PatchId>, Option<PatchId>)>,
}

/// A registered vehicle inside the coordinator.
#[derive(Debug, Clone)]
pub(crate) struct VehicleEntry {
    pub id: VehicleId,
    pub rig: VehicleRig,
    pub wheels: Vec<WheelContact>,
    pub active: bool,
}

impl VehicleEntry {
    pub fn new(id: VehicleId, rig: VehicleRig, policy: ReacquirePolicy) -> Self {
        let wheels = rig
            .wheels
            .iter()
            .map(|&mount| WheelContact {
                mount,
                tracker: ContactTracker::new(policy),
            })
            .collect();
        Self {
            id,
            rig,
            wheels,
            active: true,
        }
    }

    pub fn set_policy(&mut self, policy: ReacquirePolicy) {
        for wheel in &mut self.wheels {
            wheel.tracker.set_policy(policy);
        }
    }

    pub fn request_refresh(&mut self) {
        for wheel in &mut self.wheels {
            wheel.tracker.request_refresh();
        }
    }

    /// Updates every wheel in index order against the post-step world.
    ///
    /// Returns `None` for inactive vehicles and vehicles whose chassis has
    /// no pose; their trackers are left untouched.
    pub fn refresh<W, L>(
        &mut self,
        world: &W,
        locator: &L,
        catalog: &SurfaceCatalog,
        include_bodies: bool,
    ) -> Option<VehicleRefresh>
    where
        W: RigidBodyWorld + ?Sized,
        L: PatchLocator + ?Sized,
    {
        if !self.active {
            return None;
        }
        let Some(pose) = world.body_pose(self.rig.body) else {
            warn!(vehicle = self.id.0, body = self.rig.body.0, "chassis pose missing, skipping contact refresh");
            return None;
        };

        let adapter = CollisionQueryAdapter::new(world, locator, catalog).with_filter(QueryFilter {
            include_bodies,
            exclude: self.rig.chassis_object,
        });

        let mut refresh = VehicleRefresh {
            vehicle: Some(self.id),
            ..Default::default()
        };
        for (index, wheel) in self.wheels.iter_mut().enumerate() {
            let previous = wheel.tracker.current().patch_id();
            let first = wheel.tracker.last_outcome().is_none();
            let (origin, direction) = wheel.mount.world_ray(&pose);
            let sample = wheel.tracker.update(&adapter, origin, direction, wheel.mount.length);
            let current = sample.patch_id();
            if sample.is_grounded() {
                refresh.grounded += 1;
            }

            match wheel.tracker.last_outcome() {
                Some(UpdateOutcome::Extrapolated) => refresh.extrapolations += 1,
                Some(UpdateOutcome::Reacquired) => refresh.full_queries += 1,
                Some(UpdateOutcome::Missed) => {
                    refresh.full_queries += 1;
                    refresh.misses += 1;
                }
                None => {}
            }

            if !first && previous != current {
                trace!(vehicle = self.id.0, wheel = index, ?previous, ?current, "patch transition");
                refresh.transitions.push((index as u32, previous, current));
            }
        }
        Some(refresh)
    }
}
