//! Benjamini-Hochberg step-up adjustment.
//!
//! With p-values sorted ascending and ranks i = 1..k,
//!   q_(i) = min_{j >= i} min(1, pi0 * n * p_(j) / j)
//! computed by one backward scan over the ranks.
//!
//! Reference: Benjamini & Hochberg (1995), JRSS-B 57, 289-300.

/// Adjust p-values with the BH step-up procedure.
///
/// `n` is the total number of comparisons (at least `p.len()`) and
/// `pi0` the estimated proportion of true nulls (1.0 for plain BH).
/// The output is in the input order.
pub fn benjamini_hochberg(p: &[f64], n: f64, pi0: f64) -> Vec<f64> {
    let k = p.len();
    if k == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| p[a].total_cmp(&p[b]));

    let scale = pi0 * n;
    let mut q_sorted = vec![0.0; k];
    let last = k - 1;
    q_sorted[last] = (scale * p[order[last]] / k as f64).min(1.0);

    // Running minimum from the largest p-value down
    for i in (0..last).rev() {
        let raw = scale * p[order[i]] / (i + 1) as f64;
        q_sorted[i] = raw.min(q_sorted[i + 1]);
    }

    let mut q = vec![0.0; k];
    for (rank, &idx) in order.iter().enumerate() {
        q[idx] = q_sorted[rank];
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bh_known() {
        // R: p.adjust(c(0.03, 0.2, 0.4), "BH") = 0.09 0.30 0.40
        let q = benjamini_hochberg(&[0.03, 0.2, 0.4], 3.0, 1.0);
        assert_abs_diff_eq!(q[0], 0.09, epsilon = 1e-12);
        assert_abs_diff_eq!(q[1], 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(q[2], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_bh_running_minimum() {
        // Raw values 0.05, 0.05, 0.0333, 0.025 collapse to 0.025
        let q = benjamini_hochberg(&[0.0125, 0.025, 0.025, 0.025], 4.0, 1.0);
        for qi in &q {
            assert_abs_diff_eq!(*qi, 0.025, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bh_restores_order() {
        let p = [0.4, 0.03, 0.2];
        let q = benjamini_hochberg(&p, 3.0, 1.0);
        assert_abs_diff_eq!(q[0], 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(q[1], 0.09, epsilon = 1e-12);
        assert_abs_diff_eq!(q[2], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_bh_caps_at_one() {
        let q = benjamini_hochberg(&[0.9, 0.95], 10.0, 1.0);
        assert_eq!(q, vec![1.0, 1.0]);
    }

    #[test]
    fn test_bh_extra_comparisons_scale() {
        let q3 = benjamini_hochberg(&[0.01, 0.02], 2.0, 1.0);
        let q6 = benjamini_hochberg(&[0.01, 0.02], 6.0, 1.0);
        assert_abs_diff_eq!(q6[0], 3.0 * q3[0], epsilon = 1e-12);
        assert_abs_diff_eq!(q6[1], 3.0 * q3[1], epsilon = 1e-12);
    }

    #[test]
    fn test_bh_pi0_scales() {
        let q = benjamini_hochberg(&[0.01, 0.04], 2.0, 0.5);
        assert_abs_diff_eq!(q[0], 0.01, epsilon = 1e-12);
        assert_abs_diff_eq!(q[1], 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_bh_single_and_empty() {
        assert_eq!(benjamini_hochberg(&[0.3], 1.0, 1.0), vec![0.3]);
        assert!(benjamini_hochberg(&[], 0.0, 1.0).is_empty());
    }
}
