//! Exact confidence bounds on a binomial proportion.
//!
//! Clopper-Pearson style limits from beta quantiles, as used by
//! `binom.test`, and the map from the conditional proportion back to
//! the rate-ratio scale.

use crate::util::math::beta_quantile;

/// Lower limit for a proportion with `x` successes out of `trials`.
///
/// 0 when `x` is 0, otherwise the `alpha` quantile of Beta(x, trials - x + 1).
pub fn p_lower(x: u64, trials: u64, alpha: f64) -> f64 {
    if x == 0 {
        return 0.0;
    }
    beta_quantile(alpha, x as f64, (trials - x + 1) as f64)
}

/// Upper limit for a proportion with `x` successes out of `trials`.
///
/// 1 when `x == trials`, otherwise the `1 - alpha` quantile of
/// Beta(x + 1, trials - x).
pub fn p_upper(x: u64, trials: u64, alpha: f64) -> f64 {
    if x >= trials {
        return 1.0;
    }
    beta_quantile(1.0 - alpha, (x + 1) as f64, (trials - x) as f64)
}

/// Convert a bound `q` on the proportion n0*RR / (n0*RR + n1) into a
/// bound on RR: (q * n1) / (n0 * (1 - q)).
pub fn proportion_to_ratio(q: f64, n0: f64, n1: f64) -> f64 {
    if q >= 1.0 {
        return f64::INFINITY;
    }
    (q * n1) / (n0 * (1.0 - q))
}
