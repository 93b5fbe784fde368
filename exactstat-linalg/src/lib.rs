//! exactstat-linalg: Numerical building blocks for exactstat
//!
//! Provides the tridiagonal solver and the natural cubic spline used
//! to smooth the null-proportion curve in the FDR procedure.

pub mod decomposition;
pub mod spline;

pub use decomposition::{solve_tridiagonal, LinalgError};
pub use spline::CubicSpline;
