//! Net investment return resolution

use super::parameters::{BaselineMode, ReturnParameters};

impl ReturnParameters {
    /// Baseline CAGR in percent, taken from whichever source is selected
    pub fn baseline_pct(&self) -> f64 {
        match self.baseline {
            BaselineMode::IndexTracking => self.index_cagr_pct,
            BaselineMode::Manual => self.manual_return_pct,
        }
    }

    /// Net annual return in percent: baseline + adjustment - tax drag
    pub fn net_return_pct(&self) -> f64 {
        self.baseline_pct() + self.adjustment_pct - self.tax_drag_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_manual_baseline() {
        let returns = ReturnParameters::default();
        assert_abs_diff_eq!(returns.net_return_pct(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_index_baseline_ignores_manual_rate() {
        let returns = ReturnParameters {
            baseline: BaselineMode::IndexTracking,
            index_cagr_pct: 10.0,
            manual_return_pct: 99.0,
            adjustment_pct: -1.5,
            tax_drag_pct: 0.5,
        };
        assert_abs_diff_eq!(returns.baseline_pct(), 10.0);
        assert_abs_diff_eq!(returns.net_return_pct(), 8.0, epsilon = 1e-12);
    }
}
