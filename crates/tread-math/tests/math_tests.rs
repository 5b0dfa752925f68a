//! Integration tests for tread-math.

use tread_math::{Pose, Quat, Ray, Vec3};

// ─── Ray Tests ─────────────────────────────────────────────────

#[test]
fn ray_point_at() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z, 5.0);
    assert!((ray.at(2.0) - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    assert!((ray.end() - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-6);
}

#[test]
fn plane_hit_and_parallel_miss() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z, 5.0);
    let t = ray.intersect_plane(Vec3::new(0.0, 0.0, 1.0), Vec3::Z).unwrap();
    assert!((t - 2.0).abs() < 1e-6);

    let sideways = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::X, 5.0);
    assert!(sideways.intersect_plane(Vec3::ZERO, Vec3::Z).is_none());
}

#[test]
fn plane_beyond_length_misses() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z, 1.0);
    assert!(ray.intersect_plane(Vec3::ZERO, Vec3::Z).is_none());
}

#[test]
fn triangle_hit_inside() {
    let ray = Ray::new(Vec3::new(0.25, 0.25, 1.0), Vec3::NEG_Z, 2.0);
    let hit = ray
        .intersect_triangle(Vec3::ZERO, Vec3::X, Vec3::Y)
        .unwrap();
    assert!((hit.t - 1.0).abs() < 1e-6);
    assert!((hit.normal - Vec3::Z).length() < 1e-6);
}

#[test]
fn triangle_miss_outside() {
    let ray = Ray::new(Vec3::new(2.0, 2.0, 1.0), Vec3::NEG_Z, 2.0);
    assert!(ray.intersect_triangle(Vec3::ZERO, Vec3::X, Vec3::Y).is_none());
}

#[test]
fn sphere_entry_distance() {
    let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 10.0);
    let (t, n) = ray.intersect_sphere(Vec3::ZERO, 1.0).unwrap();
    assert!((t - 4.0).abs() < 1e-5);
    assert!((n - Vec3::Y).length() < 1e-5);
}

// ─── Pose Tests ────────────────────────────────────────────────

#[test]
fn pose_transforms_point() {
    let pose = Pose::new(
        Vec3::new(1.0, 0.0, 0.0),
        Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
    );
    let p = pose.transform_point(Vec3::X);
    assert!((p - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
}

#[test]
fn pose_integrates_linear_velocity() {
    let pose = Pose::from_translation(Vec3::ZERO);
    let next = pose.integrate(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, 0.5);
    assert!((next.position - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    assert_eq!(next.rotation, Quat::IDENTITY);
}

#[test]
fn pose_serialization() {
    let pose = Pose::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let json = serde_json::to_string(&pose).unwrap();
    let recovered: Pose = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, pose);
}
