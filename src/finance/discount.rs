//! Present value helpers for annual cash-flow streams

/// Annual discount factor to year `t`: 1 / (1 + rate)^t
pub fn discount_factor(annual_rate: f64, t: usize) -> f64 {
    (1.0 + annual_rate).powi(t as i32).recip()
}

/// Net present value of a cash-flow vector, discounting entry `t` by `(1+r)^t`.
/// Entry 0 is undiscounted.
pub fn npv(cashflows: &[f64], annual_rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf * discount_factor(annual_rate, t))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// PV of a level annuity paid at the end of each of `n` periods
    fn pv_annuity_ordinary(amount: f64, n: u32, rate: f64) -> f64 {
        if rate.abs() < 1e-10 {
            return amount * n as f64;
        }
        amount * (1.0 - (1.0 + rate).powi(-(n as i32))) / rate
    }

    #[test]
    fn test_zero_rate_npv_is_plain_sum() {
        let flows = [-50_000.0, -12_000.0, -12_360.0, 400_000.0];
        assert_eq!(npv(&flows, 0.0), flows.iter().sum::<f64>());
    }

    #[test]
    fn test_first_entry_undiscounted() {
        assert_eq!(npv(&[1_000.0], 0.25), 1_000.0);
        assert_abs_diff_eq!(npv(&[0.0, 1_100.0], 0.10), 1_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(npv(&[0.0, 0.0, 1_210.0], 0.10), 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_npv_matches_annuity_formula() {
        let mut flows = vec![0.0];
        flows.extend(vec![100.0; 12]);
        let expected = pv_annuity_ordinary(100.0, 12, 0.05);
        assert_abs_diff_eq!(npv(&flows, 0.05), expected, epsilon = 1e-9);
        // 100 * (1 - 1.05^-12) / 0.05
        assert_abs_diff_eq!(expected, 886.3252, epsilon = 1e-3);
    }

    #[test]
    fn test_discount_factor() {
        assert_eq!(discount_factor(0.055, 0), 1.0);
        assert_abs_diff_eq!(discount_factor(0.06, 2), 1.0 / 1.1236, epsilon = 1e-12);
    }
}
