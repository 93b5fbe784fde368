//! exactstat: p-value adjustment and exact rate-ratio tests.
//!
//! CLI entry point using clap for argument parsing.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "exactstat",
    version,
    about = "Multiple-comparison adjustment and the exact Poisson rate-ratio test",
    long_about = "Adjusts p-values for multiple comparisons (Bonferroni, Benjamini-Hochberg)\n\
                   and runs the exact conditional test for the ratio of two Poisson rates."
)]
struct Cli {
    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Adjust p-values for multiple comparisons
    Adjust(commands::adjust::AdjustArgs),

    /// Exact rate-ratio test for two Poisson counts
    RateRatio(commands::rate_ratio::RateRatioArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("exactstat v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Adjust(args) => commands::adjust::run(args),
        Commands::RateRatio(args) => commands::rate_ratio::run(args),
    }
}
