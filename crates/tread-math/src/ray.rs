//! Ray primitive and intersection tests.
//!
//! All intersection routines return the ray parameter `t` (distance along
//! a unit direction) and only report hits with `0 <= t <= length`.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tread_types::constants::EPSILON;

/// A finite ray: origin, unit direction and maximum extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
    /// Maximum extent along `direction`.
    pub length: f32,
}

/// Result of a ray/triangle test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Distance along the ray.
    pub t: f32,
    /// Geometric normal of the triangle (unit, right-handed winding).
    pub normal: Vec3,
    /// Barycentric coordinates `(u, v)` of the hit relative to `b` and `c`.
    pub barycentric: [f32; 2],
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3, length: f32) -> Self {
        Self {
            origin,
            direction,
            length,
        }
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Far end of the ray.
    #[inline]
    pub fn end(&self) -> Vec3 {
        self.at(self.length)
    }

    /// Intersects the infinite plane through `point` with normal `normal`.
    ///
    /// Two-sided; returns `None` when the ray is parallel to the plane.
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<f32> {
        let nd = normal.dot(self.direction);
        if nd.abs() < EPSILON {
            return None;
        }
        let t = normal.dot(point - self.origin) / nd;
        self.in_range(t)
    }

    /// Möller–Trumbore ray/triangle intersection. Two-sided.
    pub fn intersect_triangle(&self, a: Vec3, b: Vec3, c: Vec3) -> Option<TriangleHit> {
        let e1 = b - a;
        let e2 = c - a;
        let p = self.direction.cross(e2);
        let det = e1.dot(p);
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let s = self.origin - a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(e1);
        let v = self.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = self.in_range(e2.dot(q) * inv_det)?;
        let normal = e1.cross(e2).try_normalize()?;
        Some(TriangleHit {
            t,
            normal,
            barycentric: [u, v],
        })
    }

    /// Intersects a sphere, returning the entry distance and outward normal.
    ///
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<(f32, Vec3)> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let t = if -b - sq >= 0.0 { -b - sq } else { -b + sq };
        let t = self.in_range(t)?;
        let normal = (self.at(t) - center).try_normalize()?;
        Some((t, normal))
    }

    #[inline]
    fn in_range(&self, t: f32) -> Option<f32> {
        (t >= 0.0 && t <= self.length).then_some(t)
    }
}
