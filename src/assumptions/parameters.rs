//! Boundary parameter set in percent units
//!
//! Every rate here is expressed in percentage points (6.0 means 6%).
//! `Assumptions::from_parameters` validates these and converts them to fractions.

use serde::{Deserialize, Serialize};

/// Economics of selling the current home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaleParameters {
    /// Estimated sale price of the current home
    pub sale_price: f64,
    /// Outstanding mortgage paid off at sale
    pub mortgage_balance: f64,
    /// Selling costs as % of sale price
    pub selling_cost_pct: f64,
    /// Effective capital-gains rate on equity (simplified)
    pub cap_gains_pct: f64,
    /// Annual appreciation of the current home (used when keeping it)
    pub appreciation_pct: f64,
}

impl Default for SaleParameters {
    fn default() -> Self {
        Self {
            sale_price: 1_300_000.0,
            mortgage_balance: 0.0,
            selling_cost_pct: 6.0,
            cap_gains_pct: 0.0,
            appreciation_pct: 3.0,
        }
    }
}

/// Economics of buying the smaller home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseParameters {
    pub price: f64,
    /// Closing costs as % of price
    pub closing_cost_pct: f64,
    /// Share of net proceeds used as the down payment
    pub down_payment_pct: f64,
    pub mortgage_rate_pct: f64,
    pub mortgage_years: u32,
    /// Property tax as % of home value, annually
    pub property_tax_pct: f64,
    pub insurance_annual: f64,
    pub hoa_monthly: f64,
    /// Maintenance as % of home value, annually
    pub maintenance_pct: f64,
    pub appreciation_pct: f64,
}

impl Default for PurchaseParameters {
    fn default() -> Self {
        Self {
            price: 700_000.0,
            closing_cost_pct: 2.5,
            down_payment_pct: 50.0,
            mortgage_rate_pct: 6.5,
            mortgage_years: 30,
            property_tax_pct: 2.1,
            insurance_annual: 2_500.0,
            hoa_monthly: 250.0,
            maintenance_pct: 1.0,
            appreciation_pct: 3.0,
        }
    }
}

/// Rent and storage costs for the renting scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LivingCostParameters {
    pub monthly_rent: f64,
    pub rent_inflation_pct: f64,
    pub include_storage: bool,
    pub storage_monthly: f64,
    pub storage_inflation_pct: f64,
}

impl Default for LivingCostParameters {
    fn default() -> Self {
        Self {
            monthly_rent: 4_500.0,
            rent_inflation_pct: 3.0,
            include_storage: true,
            storage_monthly: 350.0,
            storage_inflation_pct: 3.0,
        }
    }
}

/// Source of the baseline investment return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BaselineMode {
    /// Long-run CAGR of a tracked index
    IndexTracking,
    /// User-supplied rate
    #[default]
    Manual,
}

/// Investment return assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnParameters {
    pub baseline: BaselineMode,
    pub index_cagr_pct: f64,
    pub manual_return_pct: f64,
    /// Added to the baseline (may be negative)
    pub adjustment_pct: f64,
    /// Subtracted from the baseline to approximate taxes on gains
    pub tax_drag_pct: f64,
}

impl Default for ReturnParameters {
    fn default() -> Self {
        Self {
            baseline: BaselineMode::Manual,
            index_cagr_pct: 10.0,
            manual_return_pct: 6.5,
            adjustment_pct: 0.0,
            tax_drag_pct: 0.5,
        }
    }
}

/// Share of available proceeds invested in each selling scenario.
/// Whatever is not invested is held as cash earning nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationParameters {
    /// Scenario A: share of net proceeds
    pub rent_invested_pct: f64,
    /// Scenario B: share of proceeds left after the down payment
    pub buy_invested_pct: f64,
    /// Scenario C: share of net proceeds
    pub storage_invested_pct: f64,
}

impl Default for AllocationParameters {
    fn default() -> Self {
        Self {
            rent_invested_pct: 100.0,
            buy_invested_pct: 100.0,
            storage_invested_pct: 50.0,
        }
    }
}

/// Annual carrying costs of staying in the current home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeepHomeParameters {
    pub property_tax_annual: f64,
    pub insurance_annual: f64,
    pub hoa_annual: f64,
    pub extra_maintenance_annual: f64,
}

impl Default for KeepHomeParameters {
    fn default() -> Self {
        Self {
            property_tax_annual: 15_600.0,
            insurance_annual: 3_200.0,
            hoa_annual: 0.0,
            extra_maintenance_annual: 6_500.0,
        }
    }
}

/// Complete input to one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub sale: SaleParameters,
    pub purchase: PurchaseParameters,
    pub living: LivingCostParameters,
    pub returns: ReturnParameters,
    pub allocation: AllocationParameters,
    pub keep_home: KeepHomeParameters,
    pub horizon_years: u32,
    pub discount_rate_pct: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            sale: SaleParameters::default(),
            purchase: PurchaseParameters::default(),
            living: LivingCostParameters::default(),
            returns: ReturnParameters::default(),
            allocation: AllocationParameters::default(),
            keep_home: KeepHomeParameters::default(),
            horizon_years: 15,
            discount_rate_pct: 5.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "horizon_years": 20, "sale": { "sale_price": 900000 } }"#;
        let params: ParameterSet = serde_json::from_str(json).unwrap();

        assert_eq!(params.horizon_years, 20);
        assert_eq!(params.sale.sale_price, 900_000.0);
        assert_eq!(params.sale.selling_cost_pct, 6.0);
        assert_eq!(params.purchase, PurchaseParameters::default());
        assert_eq!(params.discount_rate_pct, 5.5);
    }

    #[test]
    fn test_baseline_mode_round_trips_by_name() {
        let json = r#"{ "baseline": "IndexTracking" }"#;
        let returns: ReturnParameters = serde_json::from_str(json).unwrap();
        assert_eq!(returns.baseline, BaselineMode::IndexTracking);
        assert_eq!(returns.tax_drag_pct, 0.5);
    }
}
