#![allow(clippy::needless_range_loop)]
//! Banded solvers.
//!
//! The Thomas algorithm for tridiagonal systems, which is all the
//! spline fit needs: the second-derivative equations of a cubic
//! spline only couple neighbouring knots.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("Singular matrix encountered (zero pivot at row {row})")]
    SingularMatrix { row: usize },

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Need at least {min} points, got {got}")]
    TooFewPoints { min: usize, got: usize },

    #[error("Knots must be strictly increasing (violated at index {index})")]
    NonIncreasingKnots { index: usize },
}

/// Solve a tridiagonal system A * x = rhs.
///
/// # Arguments
/// - `lower`: sub-diagonal, length n - 1 (`lower[i]` is A[i+1, i])
/// - `diag`: main diagonal, length n
/// - `upper`: super-diagonal, length n - 1 (`upper[i]` is A[i, i+1])
/// - `rhs`: right-hand side, length n
///
/// No pivoting is performed, so the matrix should be diagonally
/// dominant (spline systems always are).
pub fn solve_tridiagonal(
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    rhs: &[f64],
) -> Result<Vec<f64>, LinalgError> {
    let n = diag.len();
    if rhs.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            got: rhs.len(),
        });
    }
    if n == 0 {
        return Ok(Vec::new());
    }
    for band in [lower, upper] {
        if band.len() != n - 1 {
            return Err(LinalgError::DimensionMismatch {
                expected: n - 1,
                got: band.len(),
            });
        }
    }

    // Forward sweep
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    if diag[0] == 0.0 {
        return Err(LinalgError::SingularMatrix { row: 0 });
    }
    if n > 1 {
        c_prime[0] = upper[0] / diag[0];
    }
    d_prime[0] = rhs[0] / diag[0];

    for i in 1..n {
        let denom = diag[i] - lower[i - 1] * c_prime[i - 1];
        if denom.abs() < 1e-300 {
            return Err(LinalgError::SingularMatrix { row: i });
        }
        if i < n - 1 {
            c_prime[i] = upper[i] / denom;
        }
        d_prime[i] = (rhs[i] - lower[i - 1] * d_prime[i - 1]) / denom;
    }

    // Back substitution
    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tridiag_mat_vec(lower: &[f64], diag: &[f64], upper: &[f64], x: &[f64]) -> Vec<f64> {
        let n = diag.len();
        let mut out = vec![0.0; n];
        for i in 0..n {
            out[i] = diag[i] * x[i];
            if i > 0 {
                out[i] += lower[i - 1] * x[i - 1];
            }
            if i + 1 < n {
                out[i] += upper[i] * x[i + 1];
            }
        }
        out
    }

    #[test]
    fn test_tridiagonal_solve() {
        let lower = vec![1.0, 1.0, 1.0];
        let diag = vec![4.0, 4.0, 4.0, 4.0];
        let upper = vec![1.0, 1.0, 1.0];
        let b = vec![5.0, 6.0, 6.0, 5.0];
        let x = solve_tridiagonal(&lower, &diag, &upper, &b).unwrap();
        // Solution is all ones
        for xi in &x {
            assert!((xi - 1.0).abs() < 1e-12, "x={:?}", x);
        }
    }

    #[test]
    fn test_tridiagonal_residual() {
        let lower = vec![0.5, -1.0, 2.0, 0.25];
        let diag = vec![3.0, 5.0, 6.0, 7.0, 2.0];
        let upper = vec![1.0, 2.0, -1.5, 0.5];
        let b = vec![1.0, -2.0, 3.0, 0.5, 4.0];
        let x = solve_tridiagonal(&lower, &diag, &upper, &b).unwrap();
        let ax = tridiag_mat_vec(&lower, &diag, &upper, &x);
        for i in 0..b.len() {
            assert!(
                (ax[i] - b[i]).abs() < 1e-10,
                "ax[{}]={} != b[{}]={}",
                i,
                ax[i],
                i,
                b[i]
            );
        }
    }

    #[test]
    fn test_tridiagonal_single() {
        let x = solve_tridiagonal(&[], &[2.0], &[], &[3.0]).unwrap();
        assert_eq!(x, vec![1.5]);
    }

    #[test]
    fn test_tridiagonal_empty() {
        let x = solve_tridiagonal(&[], &[], &[], &[]).unwrap();
        assert!(x.is_empty());
    }

    #[test]
    fn test_tridiagonal_singular() {
        let err = solve_tridiagonal(&[1.0], &[0.0, 1.0], &[1.0], &[1.0, 1.0]).unwrap_err();
        assert_eq!(err, LinalgError::SingularMatrix { row: 0 });
    }

    #[test]
    fn test_tridiagonal_dimension_mismatch() {
        let err = solve_tridiagonal(&[1.0], &[2.0, 2.0], &[1.0], &[1.0]).unwrap_err();
        assert_eq!(err, LinalgError::DimensionMismatch { expected: 2, got: 1 });
    }
}
