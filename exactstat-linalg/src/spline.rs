//! Natural cubic spline interpolation.
//!
//! On each interval [x_i, x_{i+1}] with h_i = x_{i+1} - x_i the spline is
//!   S(t) = M_i (x_{i+1} - t)^3 / (6 h_i) + M_{i+1} (t - x_i)^3 / (6 h_i)
//!        + (y_i / h_i - M_i h_i / 6) (x_{i+1} - t)
//!        + (y_{i+1} / h_i - M_{i+1} h_i / 6) (t - x_i)
//! where the second derivatives M solve a tridiagonal system with the
//! natural boundary conditions M_0 = M_{n-1} = 0.

use crate::decomposition::{solve_tridiagonal, LinalgError};

/// A fitted cubic spline through a set of knots.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Second derivatives at the knots.
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit a natural cubic spline through `(x[i], y[i])`.
    ///
    /// `x` must be strictly increasing. Two points give a straight line.
    pub fn natural(x: &[f64], y: &[f64]) -> Result<Self, LinalgError> {
        let n = x.len();
        if y.len() != n {
            return Err(LinalgError::DimensionMismatch {
                expected: n,
                got: y.len(),
            });
        }
        if n < 2 {
            return Err(LinalgError::TooFewPoints { min: 2, got: n });
        }
        for i in 1..n {
            if !(x[i] > x[i - 1]) {
                return Err(LinalgError::NonIncreasingKnots { index: i });
            }
        }

        let mut m = vec![0.0; n];
        if n > 2 {
            let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
            let k = n - 2;

            let diag: Vec<f64> = (1..n - 1).map(|i| 2.0 * (h[i - 1] + h[i])).collect();
            let off: Vec<f64> = (1..k).map(|i| h[i]).collect();
            let rhs: Vec<f64> = (1..n - 1)
                .map(|i| 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]))
                .collect();

            let interior = solve_tridiagonal(&off, &diag, &off, &rhs)?;
            m[1..n - 1].copy_from_slice(&interior);
        }

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            m,
        })
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Knot positions.
    pub fn knots(&self) -> &[f64] {
        &self.x
    }

    /// Second derivatives at the knots.
    pub fn second_derivatives(&self) -> &[f64] {
        &self.m
    }

    /// Evaluate the spline at `t`.
    ///
    /// Outside the knot range the end polynomials are extended.
    pub fn evaluate(&self, t: f64) -> f64 {
        let n = self.x.len();
        // Interval index i such that x[i] <= t < x[i+1], clamped to [0, n-2]
        let i = self
            .x
            .partition_point(|&xi| xi <= t)
            .saturating_sub(1)
            .min(n - 2);

        let (x0, x1) = (self.x[i], self.x[i + 1]);
        let (y0, y1) = (self.y[i], self.y[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        let h = x1 - x0;
        let a = x1 - t;
        let b = t - x0;

        m0 * a.powi(3) / (6.0 * h)
            + m1 * b.powi(3) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }
}
