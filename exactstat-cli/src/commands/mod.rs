pub mod adjust;
pub mod input;
pub mod rate_ratio;
