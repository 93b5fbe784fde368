//! The `htest`-style record returned by the rate-ratio test.
//!
//! Non-finite floats serialize as the strings "Inf", "-Inf" and "NaN",
//! so an unbounded interval end stays distinct from a missing value.

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use super::Alternative;

/// Description stored in [`RateRatioResult::method`].
pub const RATE_RATIO_METHOD: &str = "Exact Rate Ratio Test, assuming Poisson counts";

/// Confidence interval for the rate ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    #[serde(serialize_with = "serialize_float")]
    pub lower: f64,
    /// +inf for the one-sided "greater" interval.
    #[serde(serialize_with = "serialize_float")]
    pub upper: f64,
    /// Confidence level, e.g. 0.95.
    pub level: f64,
}

/// Result of the exact rate-ratio test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateRatioResult {
    /// P-value of the test.
    pub p_value: f64,
    /// [rate ratio, rate 1, rate 2]. The ratio is NaN when there are no
    /// events and +inf when only the first group has events.
    #[serde(serialize_with = "serialize_floats")]
    pub estimate: [f64; 3],
    /// Null rate ratio, or the ratio on the boundary for one-sided tests.
    pub null_value: f64,
    pub conf_int: ConfidenceInterval,
    pub alternative: Alternative,
    pub method: String,
    /// Description of the data, e.g.
    /// `c(2, 9) with time of c(17877, 16660), null rate ratio 1`.
    pub data_name: String,
}

impl RateRatioResult {
    pub fn rate_ratio(&self) -> f64 {
        self.estimate[0]
    }

    /// Individual rates (x0 / n0, x1 / n1).
    pub fn rates(&self) -> (f64, f64) {
        (self.estimate[1], self.estimate[2])
    }
}

/// JSON has no non-finite numbers; write them as R prints them.
struct JsonFloat(f64);

impl Serialize for JsonFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let x = self.0;
        if x.is_finite() {
            serializer.serialize_f64(x)
        } else if x.is_nan() {
            serializer.serialize_str("NaN")
        } else if x > 0.0 {
            serializer.serialize_str("Inf")
        } else {
            serializer.serialize_str("-Inf")
        }
    }
}

fn serialize_float<S: Serializer>(x: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    JsonFloat(*x).serialize(serializer)
}

fn serialize_floats<S: Serializer>(xs: &[f64; 3], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(xs.len()))?;
    for &x in xs {
        seq.serialize_element(&JsonFloat(x))?;
    }
    seq.end()
}
