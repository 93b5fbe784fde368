//! Distribution kernels over statrs special functions.

use statrs::distribution::{Binomial, DiscreteCDF};
use statrs::function::beta::inv_beta_reg;

use crate::error::{Result, StatsError};

/// Quantile of the Beta(a, b) distribution.
///
/// Inverse of the regularized incomplete beta function; `q` outside
/// (0, 1) maps to the matching end of the support.
pub fn beta_quantile(q: f64, a: f64, b: f64) -> f64 {
    if q <= 0.0 {
        return 0.0;
    }
    if q >= 1.0 {
        return 1.0;
    }
    inv_beta_reg(a, b, q)
}

fn binomial(trials: u64, p: f64) -> Result<Binomial> {
    Binomial::new(p, trials).map_err(|e| {
        StatsError::Numerical(format!("Binomial(n={}, p={}): {}", trials, p, e))
    })
}

/// P(X <= k) for X ~ Binomial(trials, p).
pub fn binom_cdf(k: u64, trials: u64, p: f64) -> Result<f64> {
    Ok(binomial(trials, p)?.cdf(k))
}

/// P(X > k) for X ~ Binomial(trials, p).
pub fn binom_sf(k: u64, trials: u64, p: f64) -> Result<f64> {
    Ok(binomial(trials, p)?.sf(k))
}
