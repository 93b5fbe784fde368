//! P-value adjustment for multiple comparisons.
//!
//! Maps raw p-values to q-values with Bonferroni, Benjamini-Hochberg
//! (`fdr`, alias `bh`, with an optional pi0 estimate) or no adjustment.
//!
//! `n` may be set larger than the number of observed p-values. The
//! unobserved p-values are then assumed to be greater than all observed
//! ones for Bonferroni, and equal to 1 for the FDR method.

pub mod fdr;
pub mod pi0;

use std::fmt;
use std::str::FromStr;

use ndarray::{Array, ArrayBase, Data, Dimension};
use tracing::debug;

use crate::error::{Result, StatsError};

pub use fdr::benjamini_hochberg;
pub use pi0::{estimate_pi0, Pi0Config};

/// Canonical names of the supported adjustment methods.
pub const P_ADJUST_METHODS: [&str; 3] = ["fdr", "bonferroni", "none"];

/// Multiple-comparison adjustment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdjustMethod {
    /// Benjamini-Hochberg false discovery rate.
    #[default]
    Fdr,
    /// Bonferroni family-wise error rate.
    Bonferroni,
    /// Pass-through.
    None,
}

/// Accepted spellings, compared after lowercasing.
const METHOD_NAMES: [(&str, AdjustMethod); 4] = [
    ("fdr", AdjustMethod::Fdr),
    ("bh", AdjustMethod::Fdr),
    ("bonferroni", AdjustMethod::Bonferroni),
    ("none", AdjustMethod::None),
];

impl AdjustMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustMethod::Fdr => "fdr",
            AdjustMethod::Bonferroni => "bonferroni",
            AdjustMethod::None => "none",
        }
    }
}

impl FromStr for AdjustMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        METHOD_NAMES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, method)| *method)
            .ok_or_else(|| StatsError::UnknownMethod {
                given: s.to_string(),
                allowed: P_ADJUST_METHODS.join(","),
            })
    }
}

impl fmt::Display for AdjustMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adjust p-values for multiple comparisons.
///
/// # Arguments
/// - `p`: raw p-values
/// - `method`: adjustment method
/// - `n`: number of comparisons, at least `p.len()`; `None` or a value
///   <= 0 means `p.len()`
///
/// # Returns
/// Adjusted p-values in the input order. `AdjustMethod::None` returns
/// the input unchanged without any validation.
pub fn p_adjust(p: &[f64], method: AdjustMethod, n: Option<f64>) -> Result<Vec<f64>> {
    p_adjust_with(p, method, n, &Pi0Config::default())
}

/// [`p_adjust`] with explicit pi0 estimation settings.
pub fn p_adjust_with(
    p: &[f64],
    method: AdjustMethod,
    n: Option<f64>,
    config: &Pi0Config,
) -> Result<Vec<f64>> {
    match method {
        AdjustMethod::None => Ok(p.to_vec()),
        AdjustMethod::Bonferroni => {
            let n = comparison_count(p.len(), n)?;
            validate_p_values(p)?;
            Ok(bonferroni(p, n))
        }
        AdjustMethod::Fdr => {
            let n = comparison_count(p.len(), n)?;
            validate_p_values(p)?;
            let pi0 = estimate_pi0(p, n, config)?;
            debug!("FDR adjustment: {} p-values, n={}, pi0={:.6}", p.len(), n, pi0);
            Ok(benjamini_hochberg(p, n, pi0))
        }
    }
}

/// Shape-preserving [`p_adjust`] for n-dimensional arrays.
///
/// The array is adjusted as one family in logical (row-major) order
/// and the result has the same shape as the input.
pub fn p_adjust_array<S, D>(
    p: &ArrayBase<S, D>,
    method: AdjustMethod,
    n: Option<f64>,
) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let flat: Vec<f64> = p.iter().copied().collect();
    let q = p_adjust(&flat, method, n)?;
    Array::from_shape_vec(p.raw_dim(), q).map_err(|e| StatsError::Numerical(e.to_string()))
}

/// Bonferroni adjustment: min(1, n * p).
pub fn bonferroni(p: &[f64], n: f64) -> Vec<f64> {
    p.iter().map(|&pi| (n * pi).min(1.0)).collect()
}

/// Resolve the number of comparisons.
fn comparison_count(len: usize, n: Option<f64>) -> Result<f64> {
    match n {
        Some(v) if v.is_nan() => Err(StatsError::InvalidComparisonCount { n: v, len }),
        Some(v) if v > 0.0 => {
            if v < len as f64 {
                Err(StatsError::InvalidComparisonCount { n: v, len })
            } else {
                Ok(v)
            }
        }
        _ => Ok(len as f64),
    }
}

fn validate_p_values(p: &[f64]) -> Result<()> {
    match p.iter().position(|&pi| !(0.0..=1.0).contains(&pi)) {
        Some(index) => Err(StatsError::InvalidPValue {
            index,
            value: p[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_method_parsing() {
        assert_eq!("fdr".parse::<AdjustMethod>().unwrap(), AdjustMethod::Fdr);
        assert_eq!("BH".parse::<AdjustMethod>().unwrap(), AdjustMethod::Fdr);
        assert_eq!("Bonferroni".parse::<AdjustMethod>().unwrap(), AdjustMethod::Bonferroni);
        assert_eq!("NONE".parse::<AdjustMethod>().unwrap(), AdjustMethod::None);
    }

    #[test]
    fn test_unknown_method_names_allowed_set() {
        let err = "holm".parse::<AdjustMethod>().unwrap_err();
        match err {
            StatsError::UnknownMethod { given, allowed } => {
                assert_eq!(given, "holm");
                assert_eq!(allowed, "fdr,bonferroni,none");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_method_display_round_trip() {
        for name in P_ADJUST_METHODS {
            let method: AdjustMethod = name.parse().unwrap();
            assert_eq!(method.to_string(), name);
        }
    }

    #[test]
    fn test_none_is_identity() {
        let p = vec![0.5, 0.01, 1.0, 0.0];
        assert_eq!(p_adjust(&p, AdjustMethod::None, None).unwrap(), p);
    }

    #[test]
    fn test_none_skips_validation() {
        let p = vec![1.5, f64::NAN];
        let q = p_adjust(&p, AdjustMethod::None, Some(1.0)).unwrap();
        assert_eq!(q[0], 1.5);
        assert!(q[1].is_nan());
    }

    #[test]
    fn test_bonferroni() {
        let q = p_adjust(&[0.01, 0.2, 0.5], AdjustMethod::Bonferroni, None).unwrap();
        assert_abs_diff_eq!(q[0], 0.03, epsilon = 1e-12);
        assert_abs_diff_eq!(q[1], 0.6, epsilon = 1e-12);
        assert_eq!(q[2], 1.0);
    }

    #[test]
    fn test_bonferroni_explicit_n() {
        let q = p_adjust(&[0.01, 0.02], AdjustMethod::Bonferroni, Some(10.0)).unwrap();
        assert_abs_diff_eq!(q[0], 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(q[1], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_nonpositive_n_defaults_to_len() {
        let a = p_adjust(&[0.01, 0.02], AdjustMethod::Bonferroni, Some(0.0)).unwrap();
        let b = p_adjust(&[0.01, 0.02], AdjustMethod::Bonferroni, Some(-5.0)).unwrap();
        let c = p_adjust(&[0.01, 0.02], AdjustMethod::Bonferroni, None).unwrap();
        assert_eq!(a, c);
        assert_eq!(b, c);
    }

    #[test]
    fn test_fdr_reference() {
        let q = p_adjust(&[0.03, 0.2, 0.4], AdjustMethod::Fdr, None).unwrap();
        assert_abs_diff_eq!(q[0], 0.09, epsilon = 1e-12);
        assert_abs_diff_eq!(q[1], 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(q[2], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_n_smaller_than_len_rejected() {
        let err = p_adjust(&[0.1, 0.2, 0.3], AdjustMethod::Fdr, Some(2.0)).unwrap_err();
        assert_eq!(err, StatsError::InvalidComparisonCount { n: 2.0, len: 3 });
    }

    #[test]
    fn test_invalid_pvalue_rejected() {
        let err = p_adjust(&[0.1, 1.2], AdjustMethod::Bonferroni, None).unwrap_err();
        assert_eq!(err, StatsError::InvalidPValue { index: 1, value: 1.2 });
        let err = p_adjust(&[f64::NAN], AdjustMethod::Fdr, None).unwrap_err();
        assert!(matches!(err, StatsError::InvalidPValue { index: 0, .. }));
    }

    #[test]
    fn test_empty_and_single() {
        for method in [AdjustMethod::Fdr, AdjustMethod::Bonferroni, AdjustMethod::None] {
            assert!(p_adjust(&[], method, None).unwrap().is_empty());
            assert_eq!(p_adjust(&[0.2], method, None).unwrap(), vec![0.2]);
        }
    }

    #[test]
    fn test_array_shape_preserved() {
        let p = array![[0.03, 0.2], [0.4, 0.01]];
        let q = p_adjust_array(&p, AdjustMethod::Fdr, None).unwrap();
        assert_eq!(q.shape(), &[2, 2]);

        let flat = p_adjust(&[0.03, 0.2, 0.4, 0.01], AdjustMethod::Fdr, None).unwrap();
        let q_flat: Vec<f64> = q.iter().copied().collect();
        assert_eq!(q_flat, flat);
    }

    #[test]
    fn test_array_view_bonferroni() {
        let p = array![[0.01, 0.02, 0.5], [0.1, 0.001, 0.3]];
        let q = p_adjust_array(&p.view(), AdjustMethod::Bonferroni, None).unwrap();
        assert_abs_diff_eq!(q[[0, 0]], 0.06, epsilon = 1e-12);
        assert_eq!(q[[0, 2]], 1.0);
        assert_abs_diff_eq!(q[[1, 1]], 0.006, epsilon = 1e-12);
    }
}
