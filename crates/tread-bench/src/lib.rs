//! # tread-bench
//!
//! Benchmark suite for the contact tracking pipeline.
//!
//! Provides 3 procedural track scenarios, metric collection,
//! and CSV export for regression tracking of query savings.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioCoordinator, ScenarioKind, VehicleSpec};
