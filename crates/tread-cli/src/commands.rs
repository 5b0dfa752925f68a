//! CLI command implementations.

use tread_bench::metrics::BenchmarkMetrics;
use tread_bench::runner::BenchmarkRunner;
use tread_bench::scenarios::{Scenario, ScenarioKind};
use tread_surface::SurfaceCatalog;
use tread_world::SimulationConfig;

fn parse_scenario(name: &str) -> Result<ScenarioKind, Box<dyn std::error::Error>> {
    ScenarioKind::from_name(name).ok_or_else(|| {
        let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
        format!("Unknown scenario: '{name}'. Available: {}", available.join(", ")).into()
    })
}

fn load_config(path: &str) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(SimulationConfig::from_toml_str(&text)?)
}

/// Run a scenario, printing the first vehicle's wheel contacts.
pub fn simulate(
    config_path: Option<&str>,
    scenario_name: &str,
    every: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tread Simulation");
    println!("────────────────");

    let scenario = Scenario::from_kind(parse_scenario(scenario_name)?)?;
    let config = match config_path {
        Some(path) => {
            println!("Config:   {path}");
            load_config(path)?
        }
        None => scenario.config.clone(),
    };
    println!("Scenario: {} ({} vehicles, {} ticks)", scenario.kind.name(), scenario.vehicles.len(), scenario.ticks);
    println!("Cap:      {} extrapolations", config.reacquire_cap);
    println!();

    let (mut coordinator, ids) = scenario.build(&config)?;
    let Some(&watched) = ids.first() else {
        println!("Scenario has no vehicles.");
        return Ok(());
    };
    let every = every.max(1);

    for _ in 0..scenario.ticks {
        let report = coordinator.advance(scenario.dt)?;
        if report.patch_transitions > 0 || (report.frame + 1) % every as u64 == 0 {
            println!(
                "tick {:>5}  t={:>7.3}s  full={:<3} extrap={:<3} miss={:<3} transitions={}",
                report.frame, report.sim_time, report.full_queries, report.extrapolations,
                report.misses, report.patch_transitions,
            );
            for (i, wheel) in coordinator.contacts(watched).unwrap_or_default().iter().enumerate() {
                let sample = wheel.sample();
                let patch = sample
                    .patch_id()
                    .map_or_else(|| "-".to_string(), |p| p.to_string());
                println!(
                    "    wheel {i}: depth {:.3}  {:<10} {}",
                    sample.depth(),
                    patch,
                    coordinator.surface(sample).name,
                );
            }
        }
    }

    println!();
    println!("Ray tests:        {}", coordinator.world().ray_test_count());
    println!("Telemetry events: {}", coordinator.event_bus_mut().dispatched());
    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tread Benchmark Suite");
    println!("═════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![parse_scenario(scenario_name)?]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind)?;

        println!(
            "Running: {} ({} vehicles, {} wheels, {} ticks)",
            kind.name(),
            scenario.vehicles.len(),
            scenario.wheel_count(),
            scenario.ticks,
        );

        let metrics = BenchmarkRunner::run(&scenario, &scenario.config)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Full queries:  {} ({:.1}%)", metrics.full_queries, metrics.query_ratio() * 100.0);
        println!("  Misses:        {}", metrics.misses);
        println!("  Transitions:   {}", metrics.patch_transitions);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// List surface descriptors.
pub fn surfaces(file: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match file {
        Some(path) => SurfaceCatalog::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => SurfaceCatalog::with_defaults(),
    };

    println!(
        "{:<4} {:<12} {:<10} {:>8} {:>8} {:>8} {:>8} {:>6} {:>7}",
        "id", "name", "kind", "wave", "amp", "f_tread", "f_side", "roll", "drag"
    );
    for (id, s) in catalog.iter() {
        println!(
            "{:<4} {:<12} {:<10} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>6.2} {:>7.1}",
            id.0,
            s.name,
            s.kind.name(),
            s.bump_wave_length,
            s.bump_amplitude,
            s.friction_tread,
            s.friction_non_tread,
            s.roll_resistance_coefficient,
            s.rolling_drag,
        );
    }
    Ok(())
}

/// Validate a config or surface list.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tread Validator");
    println!("───────────────");
    println!();

    if !path.ends_with(".toml") {
        println!("Unsupported file format. Use .toml (config or surface list).");
        return Ok(());
    }

    let content = std::fs::read_to_string(path)?;
    let value: toml::Table = toml::from_str(&content)?;
    if value.contains_key("surface") {
        println!("Validating surface list: {path}");
        match SurfaceCatalog::from_toml_str(&content) {
            Ok(catalog) => println!("✅ Surface list is valid ({} surfaces).", catalog.len() - 1),
            Err(e) => println!("❌ Surface list validation failed: {e}"),
        }
    } else {
        println!("Validating config: {path}");
        match SimulationConfig::from_toml_str(&content) {
            Ok(config) => println!(
                "✅ Config is valid (dt {:.5}s, cap {}).",
                config.fixed_dt, config.reacquire_cap
            ),
            Err(e) => println!("❌ Config validation failed: {e}"),
        }
    }

    Ok(())
}
