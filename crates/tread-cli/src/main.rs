//! Tread CLI: scenario runs, benchmarks and content validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tread")]
#[command(version, about = "Tread: wheel/ground contact tracking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and print wheel contacts as it goes.
    Simulate {
        /// Path to simulation config (TOML). Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Which scenario to run (straight, jump, convoy).
        #[arg(short, long, default_value = "straight")]
        scenario: String,

        /// Print contacts every N ticks.
        #[arg(long, default_value_t = 90)]
        every: u32,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (straight, jump, convoy, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List surface descriptors, built-in or from a TOML file.
    Surfaces {
        /// Surface list (TOML, `[[surface]]` tables).
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Validate a simulation config or surface list.
    Validate {
        /// Path to TOML file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate { config, scenario, every } => {
            commands::simulate(config.as_deref(), &scenario, every)
        }
        Commands::Benchmark { scenario, output } => commands::benchmark(&scenario, output.as_deref()),
        Commands::Surfaces { file } => commands::surfaces(file.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
