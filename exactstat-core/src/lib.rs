//! exactstat-core: Multiple-comparison adjustment and exact rate-ratio tests
//!
//! Two independent statistical primitives:
//! - p-value adjustment (Bonferroni, Benjamini-Hochberg with a pi0
//!   estimate, or none), shape-preserving for ndarray inputs
//! - the exact conditional test and confidence interval for the ratio
//!   of two Poisson rates

pub mod adjust;
pub mod error;
pub mod rate_ratio;
pub mod util;

pub use adjust::{p_adjust, p_adjust_array, p_adjust_with, AdjustMethod, Pi0Config};
pub use error::{Result, StatsError};
pub use rate_ratio::{rate_ratio_test, Alternative, RateRatioConfig, RateRatioResult};
