//! Shared numerical helpers.

pub mod math;
