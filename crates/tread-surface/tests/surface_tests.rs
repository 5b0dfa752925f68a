//! Integration tests for tread-surface.

use tread_surface::{SurfaceCatalog, SurfaceKind, TrackSurface};
use tread_types::{SurfaceId, TreadError};

fn wet_asphalt() -> TrackSurface {
    TrackSurface {
        name: "wet_asphalt".into(),
        kind: SurfaceKind::Asphalt,
        bump_wave_length: 10.0,
        bump_amplitude: 0.0,
        friction_non_tread: 0.7,
        friction_tread: 0.6,
        roll_resistance_coefficient: 1.0,
        rolling_drag: 0.0,
    }
}

// ─── TrackSurface Tests ───────────────────────────────────────

#[test]
fn none_surface_has_no_grip() {
    let none = TrackSurface::none();
    assert!(none.is_none());
    assert_eq!(none.friction_tread, 0.0);
    assert_eq!(none.friction_non_tread, 0.0);
    assert!(none.validate().is_ok());
}

#[test]
fn negative_friction_rejected() {
    let mut s = wet_asphalt();
    s.friction_tread = -0.1;
    assert!(matches!(s.validate(), Err(TreadError::InvalidSurface(_))));
}

#[test]
fn zero_wave_length_rejected() {
    let mut s = wet_asphalt();
    s.bump_wave_length = 0.0;
    assert!(s.validate().is_err());
}

#[test]
fn surface_serialization() {
    let s = wet_asphalt();
    let json = serde_json::to_string(&s).unwrap();
    assert!(json.contains("\"asphalt\""));
    let recovered: TrackSurface = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, s);
}

// ─── SurfaceCatalog Tests ─────────────────────────────────────

#[test]
fn empty_catalog_has_none_surface() {
    let catalog = SurfaceCatalog::empty();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get(SurfaceId::NONE).is_none());
    assert_eq!(catalog.id_of("none"), Some(SurfaceId::NONE));
}

#[test]
fn default_catalog_has_every_kind() {
    let catalog = SurfaceCatalog::with_defaults();
    assert_eq!(catalog.len(), SurfaceKind::all().len() + 1);
    for kind in SurfaceKind::all() {
        let id = catalog.id_of(kind.name()).unwrap();
        assert_eq!(catalog.get(id).kind, *kind);
    }
}

#[test]
fn unknown_id_falls_back_to_none() {
    let catalog = SurfaceCatalog::with_defaults();
    assert!(catalog.lookup(SurfaceId(999)).is_none());
    assert!(catalog.get(SurfaceId(999)).is_none());
}

#[test]
fn register_returns_stable_id() {
    let mut catalog = SurfaceCatalog::with_defaults();
    let id = catalog.register(wet_asphalt()).unwrap();
    assert_eq!(catalog.lookup(id).unwrap().name, "wet_asphalt");

    let mut drier = wet_asphalt();
    drier.friction_tread = 0.8;
    let again = catalog.register(drier).unwrap();
    assert_eq!(id, again);
    assert_eq!(catalog.get(id).friction_tread, 0.8);
}

#[test]
fn none_cannot_be_registered() {
    let mut catalog = SurfaceCatalog::empty();
    assert!(catalog.register(TrackSurface::none()).is_err());
}

#[test]
fn load_from_toml() {
    let text = r#"
        [[surface]]
        name = "tarmac"
        kind = "asphalt"
        bump_wave_length = 10.0
        bump_amplitude = 0.01
        friction_non_tread = 1.0
        friction_tread = 0.9
        roll_resistance_coefficient = 1.0
        rolling_drag = 0.0

        [[surface]]
        name = "verge"
        kind = "grass"
        bump_wave_length = 4.0
        bump_amplitude = 0.02
        friction_non_tread = 0.7
        friction_tread = 0.6
        roll_resistance_coefficient = 1.5
        rolling_drag = 20.0
    "#;
    let catalog = SurfaceCatalog::from_toml_str(text).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.names(), vec!["none", "tarmac", "verge"]);
    let verge = catalog.id_of("verge").unwrap();
    assert_eq!(catalog.get(verge).kind, SurfaceKind::Grass);
}

#[test]
fn malformed_toml_is_serialization_error() {
    let err = SurfaceCatalog::from_toml_str("[[surface]]\nname = 3").unwrap_err();
    assert!(matches!(err, TreadError::Serialization(_)));
}

#[test]
fn toml_surface_requires_kind() {
    let text = r#"
        [[surface]]
        name = "tarmac"
        bump_wave_length = 10.0
        bump_amplitude = 0.01
        friction_non_tread = 1.0
        friction_tread = 0.9
        roll_resistance_coefficient = 1.0
        rolling_drag = 0.0
    "#;
    match SurfaceCatalog::from_toml_str(text) {
        Err(TreadError::Serialization(msg)) => assert!(msg.contains("kind"), "{msg}"),
        other => panic!("expected missing-kind error, got {other:?}"),
    }
}

#[test]
fn catalog_rejects_surfaces_past_id_space() {
    let mut catalog = SurfaceCatalog::empty();
    for i in 1..=u16::MAX as usize {
        let mut surface = wet_asphalt();
        surface.name = format!("s{i}");
        let id = catalog.register(surface).unwrap();
        assert_eq!(id.index(), i);
    }
    assert_eq!(catalog.len(), u16::MAX as usize + 1);

    let mut overflow = wet_asphalt();
    overflow.name = "overflow".into();
    assert!(matches!(
        catalog.register(overflow),
        Err(TreadError::InvalidSurface(_))
    ));
    assert!(catalog.id_of("overflow").is_none());

    // Existing names still overwrite in place.
    let mut again = wet_asphalt();
    again.name = "s7".into();
    assert_eq!(catalog.register(again).unwrap().index(), 7);
}
