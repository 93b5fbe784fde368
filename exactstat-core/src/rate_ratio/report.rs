//! Human-readable rendering of [`RateRatioResult`] in the layout of R's
//! `print.htest`.

use std::fmt;

use super::result::RateRatioResult;
use super::Alternative;

const SIGNIF_DIGITS: i32 = 4;

/// Format `x` with `digits` significant digits.
fn signif(x: f64, digits: i32) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.abs() < 1e-4 {
        return format!("{:.*e}", (digits - 1) as usize, x);
    }
    let magnitude = x.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    format!("{:.*}", decimals, x)
}

/// Confidence level as a percentage, without floating-point noise.
fn percent(level: f64) -> f64 {
    (level * 100.0 * 1e6).round() / 1e6
}

impl fmt::Display for RateRatioResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let null = signif(self.null_value, SIGNIF_DIGITS);
        let hypothesis = match self.alternative {
            Alternative::TwoSided => format!("not equal to {}", null),
            Alternative::Greater => format!("greater than {}", null),
            Alternative::Less => format!("less than {}", null),
        };

        writeln!(f)?;
        writeln!(f, "\t{}", self.method)?;
        writeln!(f)?;
        writeln!(f, "data:  {}", self.data_name)?;
        writeln!(f, "p-value = {}", signif(self.p_value, SIGNIF_DIGITS))?;
        writeln!(f, "alternative hypothesis: true rate ratio is {}", hypothesis)?;
        writeln!(f, "{} percent confidence interval:", percent(self.conf_int.level))?;
        writeln!(
            f,
            " {} {}",
            signif(self.conf_int.lower, SIGNIF_DIGITS),
            signif(self.conf_int.upper, SIGNIF_DIGITS)
        )?;
        writeln!(f, "sample estimates:")?;
        writeln!(f, "  Rate Ratio       Rate 1       Rate 2")?;
        let (rate0, rate1) = self.rates();
        writeln!(
            f,
            "{:>12} {:>12} {:>12}",
            signif(self.rate_ratio(), SIGNIF_DIGITS),
            signif(rate0, SIGNIF_DIGITS),
            signif(rate1, SIGNIF_DIGITS)
        )
    }
}
