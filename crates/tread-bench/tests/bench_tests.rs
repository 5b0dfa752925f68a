//! Integration tests for tread-bench.

use tread_bench::metrics::BenchmarkMetrics;
use tread_bench::runner::BenchmarkRunner;
use tread_bench::scenarios::{Scenario, ScenarioKind};
use tread_world::SimulationConfig;

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn straight_setup() {
    let s = Scenario::straight().unwrap();
    assert_eq!(s.kind, ScenarioKind::Straight);
    assert_eq!(s.geometry.len(), 2);
    assert_eq!(s.vehicles.len(), 1);
    assert_eq!(s.wheel_count(), 4);
    assert!(!s.config.parallel);
}

#[test]
fn jump_setup() {
    let s = Scenario::jump().unwrap();
    assert_eq!(s.kind, ScenarioKind::Jump);
    assert_eq!(s.geometry.len(), 3);
}

#[test]
fn convoy_setup() {
    let s = Scenario::convoy().unwrap();
    assert_eq!(s.vehicles.len(), 12);
    assert_eq!(s.geometry.len(), 16);
    assert!(s.config.parallel);
}

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 3);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ScenarioKind::from_name("hanging_sheet"), None);
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_straight_counts_queries() {
    let mut scenario = Scenario::straight().unwrap();
    scenario.ticks = 20;
    let metrics = BenchmarkRunner::run(&scenario, &SimulationConfig::default()).unwrap();

    assert_eq!(metrics.scenario, "straight");
    assert_eq!(metrics.ticks, 20);
    assert_eq!(metrics.full_queries + metrics.extrapolations, 80);
    // Full queries on ticks 1, 10 and 19.
    assert_eq!(metrics.full_queries, 12);
    assert_eq!(metrics.ray_tests, 12);
    assert_eq!(metrics.misses, 0);
    assert!(metrics.total_wall_time > 0.0);
}

#[test]
fn precise_config_queries_every_tick() {
    let mut scenario = Scenario::straight().unwrap();
    scenario.ticks = 20;
    let metrics = BenchmarkRunner::run(&scenario, &SimulationConfig::precise()).unwrap();
    assert_eq!(metrics.full_queries, 80);
    assert_eq!(metrics.extrapolations, 0);
    assert!((metrics.query_ratio() - 1.0).abs() < 1e-12);
}

#[test]
fn straight_crosses_boundary_once_per_wheel() {
    let scenario = Scenario::straight().unwrap();
    let metrics = BenchmarkRunner::run(&scenario, &scenario.config).unwrap();
    assert_eq!(metrics.patch_transitions, 4);
}

#[test]
fn jump_loses_contact_over_gap() {
    let scenario = Scenario::jump().unwrap();
    let metrics = BenchmarkRunner::run(&scenario, &scenario.config).unwrap();
    assert!(metrics.misses > 0);
    assert!(metrics.patch_transitions > 0);
}

#[test]
fn run_convoy_in_parallel() {
    let mut scenario = Scenario::convoy().unwrap();
    scenario.ticks = 30;
    let metrics = BenchmarkRunner::run(&scenario, &scenario.config).unwrap();
    assert_eq!(metrics.vehicle_count, 12);
    assert_eq!(metrics.full_queries + metrics.extrapolations, 30 * 48);
}

#[test]
fn scenario_reusable_across_runs() {
    let mut scenario = Scenario::straight().unwrap();
    scenario.ticks = 5;
    let a = BenchmarkRunner::run(&scenario, &SimulationConfig::default()).unwrap();
    let b = BenchmarkRunner::run(&scenario, &SimulationConfig::default()).unwrap();
    assert_eq!(a.ray_tests, b.ray_tests);
    assert_eq!(a.full_queries, b.full_queries);
}

// ─── Metrics Tests ────────────────────────────────────────────

fn sample_metrics() -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: "straight".into(),
        vehicle_count: 1,
        wheel_count: 4,
        ticks: 10,
        total_wall_time: 0.01,
        avg_step_time: 0.001,
        min_step_time: 0.0005,
        max_step_time: 0.002,
        full_queries: 8,
        extrapolations: 32,
        misses: 0,
        patch_transitions: 0,
        ray_tests: 8,
    }
}

#[test]
fn csv_columns_match_header() {
    let m = sample_metrics();
    let header_cols = BenchmarkMetrics::to_csv_header().split(',').count();
    let row_cols = m.to_csv_row().split(',').count();
    assert_eq!(header_cols, row_cols);

    let csv = BenchmarkMetrics::to_csv(&[m.clone(), m]);
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.starts_with("scenario,"));
}

#[test]
fn query_ratio() {
    let m = sample_metrics();
    assert!((m.query_ratio() - 0.2).abs() < 1e-12);
    let empty = BenchmarkMetrics {
        full_queries: 0,
        extrapolations: 0,
        ..sample_metrics()
    };
    assert_eq!(empty.query_ratio(), 0.0);
}

#[test]
fn metrics_json_roundtrip() {
    let m = sample_metrics();
    let json = serde_json::to_string(&m).unwrap();
    let back: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back.scenario, m.scenario);
    assert_eq!(back.ray_tests, m.ray_tests);
}

#[test]
fn build_registers_every_vehicle() {
    let scenario = Scenario::convoy().unwrap();
    let (coordinator, ids) = scenario.build(&scenario.config).unwrap();
    assert_eq!(ids.len(), 12);
    assert_eq!(coordinator.vehicle_ids(), ids);
    assert_eq!(coordinator.world().body_count(), 12);
    assert_eq!(coordinator.frame(), 0);
}
