//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Vehicle count.
    pub vehicle_count: usize,
    /// Wheel count across all vehicles.
    pub wheel_count: usize,
    /// Number of ticks executed.
    pub ticks: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per tick (seconds).
    pub avg_step_time: f64,
    /// Minimum tick time.
    pub min_step_time: f64,
    /// Maximum tick time.
    pub max_step_time: f64,
    /// Wheel updates served by a full collision query.
    pub full_queries: u64,
    /// Wheel updates served by plane extrapolation.
    pub extrapolations: u64,
    /// Full queries that found nothing.
    pub misses: u64,
    /// Patch changes reported across all wheels.
    pub patch_transitions: u64,
    /// Ray tests issued against the world.
    pub ray_tests: u64,
}

impl BenchmarkMetrics {
    /// Share of wheel updates that needed a full query (0..1).
    pub fn query_ratio(&self) -> f64 {
        let updates = self.full_queries + self.extrapolations;
        if updates == 0 {
            0.0
        } else {
            self.full_queries as f64 / updates as f64
        }
    }

    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,vehicle_count,wheel_count,ticks,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,full_queries,extrapolations,misses,patch_transitions,ray_tests,query_ratio".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.4},{},{},{},{},{},{:.4}",
            self.scenario,
            self.vehicle_count,
            self.wheel_count,
            self.ticks,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.full_queries,
            self.extrapolations,
            self.misses,
            self.patch_transitions,
            self.ray_tests,
            self.query_ratio(),
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
