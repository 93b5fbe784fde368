//! Exact rate-ratio test.
//!
//! exactstat rate-ratio --counts 2,9 --exposures 17877,16660 [--alternative less]

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use exactstat_core::rate_ratio::{rate_ratio_test, Alternative, RateRatioConfig};

#[derive(Args)]
pub struct RateRatioArgs {
    /// Event counts for the two groups (comma-separated)
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    counts: Vec<i64>,

    /// Time at risk for the two groups (comma-separated)
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    exposures: Vec<f64>,

    /// Null rate ratio
    #[arg(long, default_value = "1.0")]
    rr: f64,

    /// Alternative hypothesis: two.sided, less, or greater (or t, l, g)
    #[arg(long, default_value = "two.sided")]
    alternative: String,

    /// Confidence level of the interval
    #[arg(long, default_value = "0.95")]
    conf_level: f64,

    /// Print the result as JSON instead of the text report (non-finite
    /// values are written as "Inf", "-Inf" or "NaN")
    #[arg(long, default_value = "false")]
    json: bool,
}

pub fn run(args: RateRatioArgs) -> Result<()> {
    let alternative: Alternative = args.alternative.parse()?;
    let config = RateRatioConfig {
        null_ratio: args.rr,
        alternative,
        conf_level: args.conf_level,
    };

    info!(
        "Rate ratio test: counts={:?}, exposures={:?}, RR={}, alternative={}",
        args.counts, args.exposures, config.null_ratio, config.alternative
    );

    let result = rate_ratio_test(&args.counts, &args.exposures, &config)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", json);
    } else {
        print!("{}", result);
    }

    Ok(())
}
