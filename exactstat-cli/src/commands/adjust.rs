//! Adjust p-values for multiple comparisons.
//!
//! exactstat adjust --pvalues-file ... [--column ...] --method fdr

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;
use tracing::info;

use exactstat_core::adjust::{p_adjust, AdjustMethod};

use super::input::{parse_pvalue_list, read_pvalue_file};

#[derive(Args)]
pub struct AdjustArgs {
    /// File of p-values (one column, or a named column with --column)
    #[arg(long)]
    pvalues_file: Option<String>,

    /// Name of the p-value column in a file with a header line
    #[arg(long, requires = "pvalues_file")]
    column: Option<String>,

    /// Inline comma-separated p-values
    #[arg(long, conflicts_with = "pvalues_file")]
    pvalues: Option<String>,

    /// Adjustment method: fdr (alias bh), bonferroni, or none
    #[arg(long, default_value = "fdr")]
    method: String,

    /// Total number of comparisons (default: number of p-values)
    #[arg(long)]
    n_tests: Option<f64>,
}

pub fn run(args: AdjustArgs) -> Result<()> {
    let method: AdjustMethod = args.method.parse()?;

    let pvalues = if let Some(ref path) = args.pvalues_file {
        read_pvalue_file(Path::new(path), args.column.as_deref())?
    } else if let Some(ref list) = args.pvalues {
        parse_pvalue_list(list)?
    } else {
        bail!("Must specify --pvalues-file or --pvalues");
    };

    info!(
        "Adjusting {} p-values with method={}, n={:?}",
        pvalues.len(),
        method,
        args.n_tests
    );

    let qvalues = p_adjust(&pvalues, method, args.n_tests)?;

    println!("p\tq");
    for (p, q) in pvalues.iter().zip(qvalues.iter()) {
        println!("{}\t{}", p, q);
    }

    Ok(())
}
