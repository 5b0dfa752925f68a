//! # tread-world
//!
//! Fixed-timestep coordination between the rigid-body world and the
//! per-wheel contact trackers.
//!
//! ## Key Types
//!
//! - [`WorldStepCoordinator`]: steps the world, then refreshes every wheel
//! - [`RigidBodyWorld`]: the engine interface the coordinator drives
//! - [`SimulationConfig`]: fixed step, reacquisition cap, query participation
//! - [`VehicleRig`]: chassis body plus wheel ray mounts
//! - [`TrackGeometry`]: patch table implementing `PatchLocator`
//! - [`KinematicWorld`]: reference world for tests, benchmarks and demos

pub mod config;
pub mod coordinator;
pub mod kinematic;
pub mod track;
pub mod vehicle;
pub mod world;

pub use config::SimulationConfig;
pub use coordinator::{StepReport, WorldStepCoordinator};
pub use kinematic::{KinematicBody, KinematicWorld};
pub use track::{TrackGeometry, TrackPatch};
pub use vehicle::{VehicleRig, WheelContact, WheelMount};
pub use world::RigidBodyWorld;
