//! Estimation of pi0, the proportion of true null hypotheses.
//!
//! For each threshold lambda on a fixed grid,
//!   pi0(lambda) = #{p > lambda} / (m * (1 - lambda))
//! A cubic spline is fitted through (lambda, pi0(lambda)) and evaluated
//! at the largest lambda of the grid.
//!
//! Reference: Storey & Tibshirani (2003), Statistical significance for
//! genomewide studies. PNAS 100(16), 9440-9445.

use exactstat_linalg::CubicSpline;
use tracing::{debug, warn};

use crate::error::{Result, StatsError};

/// Configuration for the pi0 estimate.
#[derive(Debug, Clone)]
pub struct Pi0Config {
    /// Below this many observed p-values pi0 is fixed at 1.
    pub min_tests: usize,
    /// Spacing of the lambda grid.
    pub lambda_step: f64,
    /// Exclusive upper end of the lambda grid.
    pub lambda_max: f64,
}

impl Default for Pi0Config {
    fn default() -> Self {
        Self {
            min_tests: 100,
            lambda_step: 0.01,
            lambda_max: 0.90,
        }
    }
}

/// Upper limit on the number of lambda thresholds.
const MAX_GRID_POINTS: usize = 1_000_000;

impl Pi0Config {
    /// Check that the lambda grid is well defined.
    ///
    /// Requires a finite `lambda_step > 0`, `0 < lambda_max <= 1` and a
    /// grid of at least two points.
    pub fn validate(&self) -> Result<()> {
        if !(self.lambda_step.is_finite() && self.lambda_step > 0.0) {
            return Err(StatsError::InvalidPi0Config(format!(
                "lambda_step must be finite and positive, got {}",
                self.lambda_step
            )));
        }
        if !(self.lambda_max > 0.0 && self.lambda_max <= 1.0) {
            return Err(StatsError::InvalidPi0Config(format!(
                "lambda_max must lie in (0, 1], got {}",
                self.lambda_max
            )));
        }
        let points = (self.lambda_max / self.lambda_step).ceil();
        if points < 2.0 || points > MAX_GRID_POINTS as f64 {
            return Err(StatsError::InvalidPi0Config(format!(
                "lambda grid must have between 2 and {} points, got {} (step {}, max {})",
                MAX_GRID_POINTS, points, self.lambda_step, self.lambda_max
            )));
        }
        Ok(())
    }

    /// Thresholds 0, step, 2*step, ... strictly below `lambda_max`.
    pub fn lambda_grid(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let n_grid = (self.lambda_max / self.lambda_step).ceil() as usize;
        Ok((0..n_grid).map(|i| i as f64 * self.lambda_step).collect())
    }
}

/// Tail-proportion estimates pi0(lambda) over the lambda grid.
///
/// `m` is the total number of tests. The `m - p.len()` unobserved tests
/// count as p = 1, so they lie above every lambda.
pub fn pi0_lambda_curve(p: &[f64], m: f64, lambdas: &[f64]) -> Vec<f64> {
    let unobserved = (m - p.len() as f64).max(0.0);
    lambdas
        .iter()
        .map(|&lambda| {
            let above = p.iter().filter(|&&pi| pi > lambda).count() as f64;
            (above + unobserved) / (m * (1.0 - lambda))
        })
        .collect()
}

/// Estimate pi0 for a set of p-values out of `m` total tests.
///
/// Fails with [`StatsError::InvalidPi0Config`] when the lambda grid is
/// ill-defined. Returns 1.0 when fewer than `config.min_tests` p-values
/// are observed. Estimates above 1 are clamped to 1. A negative estimate
/// is returned as-is with a warning.
pub fn estimate_pi0(p: &[f64], m: f64, config: &Pi0Config) -> Result<f64> {
    let lambdas = config.lambda_grid()?;
    if p.len() < config.min_tests {
        debug!(
            "{} p-values (< {}), using pi0 = 1",
            p.len(),
            config.min_tests
        );
        return Ok(1.0);
    }

    let curve = pi0_lambda_curve(p, m, &lambdas);
    let spline = CubicSpline::natural(&lambdas, &curve)?;

    let lambda_last = spline.knots()[spline.len() - 1];
    let mut pi0 = spline.evaluate(lambda_last);
    debug!("pi0 spline estimate at lambda={:.2}: {:.6}", lambda_last, pi0);

    if pi0 > 1.0 {
        pi0 = 1.0;
    }
    if pi0 < 0.0 {
        warn!("pi0 is not between 0 and 1: {}", pi0);
    }

    Ok(pi0)
}
