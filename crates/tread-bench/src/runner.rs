//! Benchmark runner: executes scenarios through the coordinator and
//! collects metrics.

use std::time::Instant;

use tread_types::TreadResult;
use tread_world::SimulationConfig;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario under `config`.
    ///
    /// The scenario's track is installed into a fresh world, so a
    /// scenario can be run repeatedly with different configs.
    pub fn run(scenario: &Scenario, config: &SimulationConfig) -> TreadResult<BenchmarkMetrics> {
        let (mut coordinator, _) = scenario.build(config)?;

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.ticks as usize);
        let mut full_queries = 0u64;
        let mut extrapolations = 0u64;
        let mut misses = 0u64;
        let mut patch_transitions = 0u64;

        let total_start = Instant::now();

        for _ in 0..scenario.ticks {
            let report = coordinator.advance(scenario.dt)?;
            step_times.push(report.wall_time);
            full_queries += report.full_queries as u64;
            extrapolations += report.extrapolations as u64;
            misses += report.misses as u64;
            patch_transitions += report.patch_transitions as u64;
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            vehicle_count: scenario.vehicles.len(),
            wheel_count: scenario.wheel_count(),
            ticks: scenario.ticks,
            total_wall_time,
            avg_step_time: avg_step,
            min_step_time: min_step,
            max_step_time: max_step,
            full_queries,
            extrapolations,
            misses,
            patch_transitions,
            ray_tests: coordinator.world().ray_test_count(),
        })
    }

    /// Run all scenarios, each under its own config.
    pub fn run_all() -> TreadResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind)?;
            let metrics = Self::run(&scenario, &scenario.config)?;
            results.push(metrics);
        }
        Ok(results)
    }
}
