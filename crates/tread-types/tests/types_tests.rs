//! Integration tests for tread-types.

use tread_types::{PatchHandle, PatchId, SurfaceId, TreadError, VehicleId};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn surface_none_is_default() {
    assert_eq!(SurfaceId::default(), SurfaceId::NONE);
    assert!(SurfaceId::NONE.is_none());
    assert!(!SurfaceId(3).is_none());
}

#[test]
fn patch_handle_index() {
    assert_eq!(PatchHandle(7).index(), 7);
}

#[test]
fn ids_display() {
    assert_eq!(PatchId(-4).to_string(), "PatchId(-4)");
    assert_eq!(VehicleId(2).to_string(), "VehicleId(2)");
}

#[test]
fn ids_are_serializable() {
    let id = PatchId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: PatchId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = TreadError::InvalidRig("wheel 2 has zero ray length".into());
    assert!(err.to_string().contains("wheel 2"));
}

#[test]
fn timestep_error_display() {
    let err = TreadError::InvalidTimestep { dt: -0.5 };
    assert!(err.to_string().contains("-0.5"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "surfaces.toml");
    let err: TreadError = io.into();
    assert!(matches!(err, TreadError::Io(_)));
}
