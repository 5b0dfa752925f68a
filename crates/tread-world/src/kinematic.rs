//! Reference rigid-body world.
//!
//! Bodies move with constant linear and angular velocity; static track
//! triangles never move. There is no collision response. This is enough
//! to drive the coordinator end to end without a physics engine.

use std::sync::atomic::{AtomicU64, Ordering};

use tread_contact::{ObjectKind, QueryFilter, RayCaster, RayHit};
use tread_math::{Pose, Ray, Vec3};
use tread_types::{BodyId, CollisionObjectId, TreadError, TreadResult};

use crate::world::RigidBodyWorld;

/// A body moving at constant velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    pub pose: Pose,
    pub linear_velocity: Vec3,
    /// World-space axis scaled by rad/s.
    pub angular_velocity: Vec3,
    /// Optional sphere collider centered on the body.
    pub sphere: Option<(CollisionObjectId, f32)>,
}

#[derive(Debug, Clone, Copy)]
struct StaticTriangle {
    object: CollisionObjectId,
    primitive: u32,
    vertices: [Vec3; 3],
}

/// Constant-velocity world with brute-force ray tests.
#[derive(Debug, Default)]
pub struct KinematicWorld {
    bodies: Vec<KinematicBody>,
    triangles: Vec<StaticTriangle>,
    next_object: u32,
    steps: u64,
    ray_tests: AtomicU64,
}

impl KinematicWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a body without a collider.
    pub fn add_body(&mut self, pose: Pose) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(KinematicBody {
            pose,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            sphere: None,
        });
        id
    }

    /// Adds a body with a sphere collider (hit as `ObjectKind::Body`).
    pub fn add_sphere_body(&mut self, pose: Pose, radius: f32) -> (BodyId, CollisionObjectId) {
        let object = self.allocate_object();
        let id = self.add_body(pose);
        self.bodies[id.index()].sphere = Some((object, radius));
        (id, object)
    }

    /// Adds static triangles as one object. Primitive `i` is `triangles[i]`.
    pub fn add_static_triangles(&mut self, triangles: Vec<[Vec3; 3]>) -> CollisionObjectId {
        let object = self.allocate_object();
        self.triangles
            .extend(triangles.into_iter().enumerate().map(|(i, vertices)| StaticTriangle {
                object,
                primitive: i as u32,
                vertices,
            }));
        object
    }

    fn allocate_object(&mut self) -> CollisionObjectId {
        let object = CollisionObjectId(self.next_object);
        self.next_object += 1;
        object
    }

    pub fn body(&self, body: BodyId) -> Option<&KinematicBody> {
        self.bodies.get(body.index())
    }

    /// Sets a body's velocities.
    pub fn set_velocity(&mut self, body: BodyId, linear: Vec3, angular: Vec3) -> TreadResult<()> {
        let b = self.body_mut(body)?;
        b.linear_velocity = linear;
        b.angular_velocity = angular;
        Ok(())
    }

    /// Teleports a body.
    pub fn set_pose(&mut self, body: BodyId, pose: Pose) -> TreadResult<()> {
        self.body_mut(body)?.pose = pose;
        Ok(())
    }

    fn body_mut(&mut self, body: BodyId) -> TreadResult<&mut KinematicBody> {
        self.bodies
            .get_mut(body.index())
            .ok_or_else(|| TreadError::World(format!("unknown body {}", body.0)))
    }

    /// Number of ray tests issued since creation.
    pub fn ray_test_count(&self) -> u64 {
        self.ray_tests.load(Ordering::Relaxed)
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

impl RayCaster for KinematicWorld {
    fn ray_test(&self, ray: &Ray, filter: &QueryFilter) -> Option<RayHit> {
        self.ray_tests.fetch_add(1, Ordering::Relaxed);
        let mut best: Option<RayHit> = None;
        let mut consider = |hit: RayHit| {
            if best.map_or(true, |b| hit.distance < b.distance) {
                best = Some(hit);
            }
        };

        for tri in &self.triangles {
            if !filter.accepts(tri.object, ObjectKind::Track) {
                continue;
            }
            let [a, b, c] = tri.vertices;
            if let Some(hit) = ray.intersect_triangle(a, b, c) {
                consider(RayHit {
                    position: ray.at(hit.t),
                    normal: hit.normal,
                    distance: hit.t,
                    object: tri.object,
                    kind: ObjectKind::Track,
                    primitive: Some(tri.primitive),
                });
            }
        }

        for body in &self.bodies {
            let Some((object, radius)) = body.sphere else {
                continue;
            };
            if !filter.accepts(object, ObjectKind::Body) {
                continue;
            }
            if let Some((t, normal)) = ray.intersect_sphere(body.pose.position, radius) {
                consider(RayHit {
                    position: ray.at(t),
                    normal,
                    distance: t,
                    object,
                    kind: ObjectKind::Body,
                    primitive: None,
                });
            }
        }

        best
    }
}

impl RigidBodyWorld for KinematicWorld {
    fn step_simulation(&mut self, dt: f32) -> TreadResult<()> {
        for body in &mut self.bodies {
            body.pose = body.pose.integrate(body.linear_velocity, body.angular_velocity, dt);
        }
        self.steps += 1;
        Ok(())
    }

    fn body_pose(&self, body: BodyId) -> Option<Pose> {
        self.bodies.get(body.index()).map(|b| b.pose)
    }

    fn name(&self) -> &str {
        "kinematic_world"
    }
}
