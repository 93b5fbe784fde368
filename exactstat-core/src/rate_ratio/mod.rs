//! Exact rate-ratio test assuming Poisson counts.
//!
//! Conditional on the total count x0 + x1, the first count follows
//!   x0 ~ Binomial(x0 + x1, p),  p = n0 * RR / (n0 * RR + n1)
//! under the null rate ratio RR. One-sided p-values are binomial tail
//! probabilities; the two-sided p-value is twice the smaller tail,
//! capped at 1 (Lehmann 1986, p. 152). The confidence interval maps
//! Clopper-Pearson limits on p back to the rate-ratio scale.
//!
//! Reference: Fay (2010), Two-sided exact tests and matching confidence
//! intervals for discrete data. R Journal 2(1), 53-58.

pub mod bounds;
pub mod report;
pub mod result;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::util::math::{binom_cdf, binom_sf};

use bounds::{p_lower, p_upper, proportion_to_ratio};
pub use result::{ConfidenceInterval, RateRatioResult, RATE_RATIO_METHOD};

/// Alternative hypothesis for the rate ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Alternative {
    #[default]
    #[serde(rename = "two.sided")]
    TwoSided,
    #[serde(rename = "less")]
    Less,
    #[serde(rename = "greater")]
    Greater,
}

/// Accepted spellings, compared after lowercasing.
const ALTERNATIVE_NAMES: [(&str, Alternative); 7] = [
    ("two.sided", Alternative::TwoSided),
    ("two_sided", Alternative::TwoSided),
    ("t", Alternative::TwoSided),
    ("less", Alternative::Less),
    ("l", Alternative::Less),
    ("greater", Alternative::Greater),
    ("g", Alternative::Greater),
];

impl Alternative {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alternative::TwoSided => "two.sided",
            Alternative::Less => "less",
            Alternative::Greater => "greater",
        }
    }
}

impl FromStr for Alternative {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        ALTERNATIVE_NAMES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, alt)| *alt)
            .ok_or_else(|| StatsError::UnknownAlternative(s.to_string()))
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for the rate-ratio test.
#[derive(Debug, Clone)]
pub struct RateRatioConfig {
    /// Null rate ratio (two-sided), or the ratio on the boundary between
    /// null and alternative (one-sided).
    pub null_ratio: f64,
    pub alternative: Alternative,
    /// Confidence level of the returned interval.
    pub conf_level: f64,
}

impl Default for RateRatioConfig {
    fn default() -> Self {
        Self {
            null_ratio: 1.0,
            alternative: Alternative::TwoSided,
            conf_level: 0.95,
        }
    }
}

/// Run the exact rate-ratio test.
///
/// # Arguments
/// - `x`: the two event counts
/// - `n`: the two times at risk (e.g. person-years)
/// - `config`: null ratio, alternative and confidence level
///
/// The estimated ratio is (x[0] / n[0]) / (x[1] / n[1]).
pub fn rate_ratio_test(x: &[i64], n: &[f64], config: &RateRatioConfig) -> Result<RateRatioResult> {
    let (counts, exposures) = validate_inputs(x, n, config)?;
    let (y, x1) = (counts[0], counts[1]);
    let (n0, n1) = (exposures[0], exposures[1]);
    let rr = config.null_ratio;
    let total = y + x1;

    let rate0 = y as f64 / n0;
    let rate1 = x1 as f64 / n1;
    let estimate = [rate0 / rate1, rate0, rate1];

    let p_null = (n0 * rr) / (n0 * rr + n1);
    let pval_less = binom_cdf(y, total, p_null)?;
    let pval_greater = if y == 0 {
        1.0
    } else {
        binom_sf(y - 1, total, p_null)?
    };
    debug!(
        "Rate ratio test: p={:.6}, P(X<=x)={:.6e}, P(X>=x)={:.6e}",
        p_null, pval_less, pval_greater
    );

    let conf_level = config.conf_level;
    let (p_value, lower, upper) = match config.alternative {
        Alternative::Less => {
            let alpha = 1.0 - conf_level;
            let hi = proportion_to_ratio(p_upper(y, total, alpha), n0, n1);
            (pval_less, 0.0, hi)
        }
        Alternative::Greater => {
            let alpha = 1.0 - conf_level;
            let lo = proportion_to_ratio(p_lower(y, total, alpha), n0, n1);
            (pval_greater, lo, f64::INFINITY)
        }
        Alternative::TwoSided => {
            let alpha = (1.0 - conf_level) / 2.0;
            let lo = proportion_to_ratio(p_lower(y, total, alpha), n0, n1);
            let hi = proportion_to_ratio(p_upper(y, total, alpha), n0, n1);
            ((2.0 * pval_less.min(pval_greater)).min(1.0), lo, hi)
        }
    };

    Ok(RateRatioResult {
        p_value,
        estimate,
        null_value: rr,
        conf_int: ConfidenceInterval {
            lower,
            upper,
            level: conf_level,
        },
        alternative: config.alternative,
        method: RATE_RATIO_METHOD.to_string(),
        data_name: format!(
            "c({}, {}) with time of c({}, {}), null rate ratio {}",
            y, x1, n0, n1, rr
        ),
    })
}

/// Check the preconditions in order and return the counts as u64.
fn validate_inputs(x: &[i64], n: &[f64], config: &RateRatioConfig) -> Result<([u64; 2], [f64; 2])> {
    if x.len() != 2 {
        return Err(StatsError::CountLength(x.len()));
    }
    if n.len() != x.len() {
        return Err(StatsError::LengthMismatch {
            x_len: x.len(),
            n_len: n.len(),
        });
    }
    if let Some(index) = n.iter().position(|&ni| !(ni > 0.0)) {
        return Err(StatsError::NonPositiveExposure {
            index,
            value: n[index],
        });
    }
    if let Some(index) = x.iter().position(|&xi| xi < 0) {
        return Err(StatsError::NegativeCount {
            index,
            value: x[index],
        });
    }
    if !(config.null_ratio.is_finite() && config.null_ratio > 0.0) {
        return Err(StatsError::InvalidRateRatio(config.null_ratio));
    }
    if !(config.conf_level > 0.0 && config.conf_level < 1.0) {
        return Err(StatsError::InvalidConfLevel(config.conf_level));
    }

    Ok(([x[0] as u64, x[1] as u64], [n[0], n[1]]))
}
