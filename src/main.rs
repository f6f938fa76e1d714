//! `pet-purchase`: run the pet store search from the command line.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pet_purchase::ga::{GaConfig, GaRunner};
use pet_purchase::purchase::{PetPurchaseProblem, Report};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pet-purchase")]
#[command(about = "Evolve a purchase of 100 animals for exactly $100", long_about = None)]
struct Cli {
    /// Maximum number of generations to breed
    #[arg(short, long, default_value_t = 20_000)]
    generations: usize,

    /// Individuals per generation (even, at least 2)
    #[arg(short, long, default_value_t = 30)]
    population: usize,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many milliseconds
    #[arg(long, value_name = "MS")]
    time_limit_ms: Option<u64>,

    /// Score each generation in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Output format for the best purchase
    #[arg(short, long, value_enum, default_value_t = Format::Line)]
    format: Format,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `Dogs: 3, Cats: 41, Mice: 56, Fitness: 100, Generation 812`
    Line,
    /// Bordered table
    Table,
}

fn setup_logging(json: bool, default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

fn build_config(cli: &Cli) -> GaConfig {
    #[cfg(not(feature = "parallel"))]
    if cli.parallel {
        tracing::warn!("--parallel has no effect: built without the `parallel` feature");
    }

    let mut config = GaConfig::default()
        .with_max_generations(cli.generations)
        .with_population_size(cli.population)
        .with_parallel(cli.parallel);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = cli.time_limit_ms {
        config = config.with_time_limit_ms(ms);
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_json, &cli.log_level);

    let config = build_config(&cli);
    let problem = PetPurchaseProblem::default();
    let result = GaRunner::run(&problem, &config).context("invalid search configuration")?;

    if result.is_degenerate() {
        tracing::warn!(
            generations = result.generations,
            "no purchase came within tolerance of 100 animals for $100"
        );
    }

    let report = Report::from_result(&result);
    match cli.format {
        Format::Line => println!("{report}"),
        Format::Table => println!("{}", report.table()),
    }

    Ok(())
}
