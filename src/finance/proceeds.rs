//! One-time sale economics for the current home

use serde::{Deserialize, Serialize};

use crate::assumptions::SaleTerms;

/// Breakdown of a home sale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaleProceeds {
    pub gross_sale: f64,
    pub selling_costs: f64,
    /// Price less mortgage payoff and selling costs
    pub equity_before_tax: f64,
    pub cap_gains_tax: f64,
    /// Cash left after the sale; negative when the sale is underwater
    pub net_proceeds: f64,
}

impl SaleProceeds {
    /// Compute sale proceeds from a price, payoff balance, and fractional rates
    pub fn calculate(
        sale_price: f64,
        mortgage_balance: f64,
        selling_cost_rate: f64,
        cap_gains_rate: f64,
    ) -> Self {
        let selling_costs = sale_price * selling_cost_rate;
        let equity_before_tax = sale_price - mortgage_balance - selling_costs;
        // Underwater sales pay no tax
        let cap_gains_tax = equity_before_tax.max(0.0) * cap_gains_rate;
        let net_proceeds = equity_before_tax - cap_gains_tax;

        if net_proceeds < 0.0 {
            log::warn!(
                "sale is underwater: mortgage {:.2} exceeds price {:.2} net of costs",
                mortgage_balance,
                sale_price - selling_costs
            );
        }

        Self {
            gross_sale: sale_price,
            selling_costs,
            equity_before_tax,
            cap_gains_tax,
            net_proceeds,
        }
    }

    pub fn from_terms(terms: &SaleTerms) -> Self {
        Self::calculate(
            terms.price,
            terms.mortgage_balance,
            terms.selling_cost_rate,
            terms.cap_gains_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_frictionless_sale_returns_price() {
        let proceeds = SaleProceeds::calculate(850_000.0, 0.0, 0.0, 0.0);
        assert_eq!(proceeds.net_proceeds, 850_000.0);
        assert_eq!(proceeds.cap_gains_tax, 0.0);
    }

    #[test]
    fn test_reference_sale() {
        let proceeds = SaleProceeds::calculate(1_300_000.0, 0.0, 6.0 / 100.0, 0.0);
        assert_abs_diff_eq!(proceeds.selling_costs, 78_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(proceeds.net_proceeds, 1_222_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cap_gains_on_positive_equity() {
        let proceeds = SaleProceeds::calculate(500_000.0, 100_000.0, 0.05, 0.20);
        // equity = 500k - 100k - 25k = 375k, tax = 75k
        assert_abs_diff_eq!(proceeds.equity_before_tax, 375_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(proceeds.cap_gains_tax, 75_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(proceeds.net_proceeds, 300_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_underwater_sale_pays_no_tax() {
        let proceeds = SaleProceeds::calculate(400_000.0, 420_000.0, 0.06, 0.25);
        assert_eq!(proceeds.cap_gains_tax, 0.0);
        assert_abs_diff_eq!(proceeds.net_proceeds, -44_000.0, epsilon = 1e-6);
    }
}
