//! Error type shared by the adjuster and the rate-ratio test.
//!
//! Every argument check fails at the point of detection with a message
//! naming the violated constraint. Numerically odd intermediates (such
//! as a negative pi0 estimate) are logged instead and never end up here.

use exactstat_linalg::LinalgError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("method must be one of {allowed}, got '{given}'")]
    UnknownMethod { given: String, allowed: String },

    #[error("'arg' should be one of \"two.sided\", \"less\", \"greater\", got '{0}'")]
    UnknownAlternative(String),

    #[error("n must be at least the number of p-values ({len}), got {n}")]
    InvalidComparisonCount { n: f64, len: usize },

    #[error("p-value at index {index} must lie in [0, 1], got {value}")]
    InvalidPValue { index: usize, value: f64 },

    #[error("x must have a length 2, got {0}")]
    CountLength(usize),

    #[error("'x' and 'n' must have the same length ({x_len} vs {n_len})")]
    LengthMismatch { x_len: usize, n_len: usize },

    #[error("elements of 'n' must be positive (n[{index}] = {value})")]
    NonPositiveExposure { index: usize, value: f64 },

    #[error("elements of 'x' must be nonnegative (x[{index}] = {value})")]
    NegativeCount { index: usize, value: i64 },

    #[error("RR must be a finite number greater than 0, got {0}")]
    InvalidRateRatio(f64),

    #[error("'conf.level' must be a single number between 0 and 1, got {0}")]
    InvalidConfLevel(f64),

    #[error("invalid pi0 settings: {0}")]
    InvalidPi0Config(String),

    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_constraint() {
        let e = StatsError::UnknownMethod {
            given: "holm".into(),
            allowed: "fdr,bonferroni,none".into(),
        };
        assert_eq!(
            e.to_string(),
            "method must be one of fdr,bonferroni,none, got 'holm'"
        );

        let e = StatsError::InvalidRateRatio(0.0);
        assert!(e.to_string().contains("RR must be a finite number greater than 0"));

        let e = StatsError::InvalidConfLevel(1.0);
        assert!(e.to_string().contains("between 0 and 1"));

        let e = StatsError::NegativeCount { index: 1, value: -3 };
        assert!(e.to_string().contains("x[1] = -3"));
    }

    #[test]
    fn test_linalg_conversion() {
        let e: StatsError = LinalgError::TooFewPoints { min: 2, got: 0 }.into();
        assert!(matches!(e, StatsError::Linalg(_)));
        assert_eq!(e.to_string(), "Need at least 2 points, got 0");
    }
}
