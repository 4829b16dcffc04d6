//! Projection assumptions: boundary parameters, validation, and fractional rates

mod parameters;
mod returns;
pub mod loader;

pub use parameters::{
    AllocationParameters, BaselineMode, KeepHomeParameters, LivingCostParameters,
    ParameterSet, PurchaseParameters, ReturnParameters, SaleParameters,
};

use crate::error::{ModelError, Result};

/// Longest horizon accepted at the boundary
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Longest mortgage term accepted at the boundary
pub const MAX_MORTGAGE_YEARS: u32 = 50;

/// Sale of the current home, rates as fractions
#[derive(Debug, Clone, PartialEq)]
pub struct SaleTerms {
    pub price: f64,
    pub mortgage_balance: f64,
    pub selling_cost_rate: f64,
    pub cap_gains_rate: f64,
    pub appreciation_rate: f64,
}

/// Purchase of the smaller home, rates as fractions
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseTerms {
    pub price: f64,
    pub closing_cost_rate: f64,
    pub down_payment_share: f64,
    pub mortgage_rate: f64,
    pub mortgage_years: u32,
    pub property_tax_rate: f64,
    pub insurance_annual: f64,
    pub hoa_annual: f64,
    pub maintenance_rate: f64,
    pub appreciation_rate: f64,
}

impl PurchaseTerms {
    pub fn closing_costs(&self) -> f64 {
        self.price * self.closing_cost_rate
    }
}

/// Starting rent and storage with their inflation rates
#[derive(Debug, Clone, PartialEq)]
pub struct LivingCosts {
    pub monthly_rent: f64,
    pub rent_inflation: f64,
    pub include_storage: bool,
    pub storage_monthly: f64,
    pub storage_inflation: f64,
}

/// Invested share of available proceeds per selling scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestedShares {
    pub rent: f64,
    pub buy: f64,
    pub storage: f64,
}

/// Fixed annual carrying costs of keeping the current home
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeepHomeCosts {
    pub property_tax: f64,
    pub insurance: f64,
    pub hoa: f64,
    pub extra_maintenance: f64,
}

impl KeepHomeCosts {
    pub fn annual_total(&self) -> f64 {
        self.property_tax + self.insurance + self.hoa + self.extra_maintenance
    }
}

/// Validated assumptions with every rate stored as a fraction
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub sale: SaleTerms,
    pub purchase: PurchaseTerms,
    pub living: LivingCosts,
    /// Net annual investment return (baseline + adjustment - tax drag)
    pub net_return: f64,
    pub invested: InvestedShares,
    pub keep_home: KeepHomeCosts,
    pub horizon_years: u32,
    pub discount_rate: f64,
}

fn fraction(pct: f64) -> f64 {
    pct / 100.0
}

fn finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::invalid(field, format!("must be finite, got {}", value)))
    }
}

fn amount(field: &str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(ModelError::invalid(field, format!("must be non-negative, got {}", value)));
    }
    Ok(value)
}

/// Non-negative rate in percent, returned as a fraction
fn cost_rate(field: &str, pct: f64) -> Result<f64> {
    Ok(fraction(amount(field, pct)?))
}

/// Percentage share in [0, 100], returned as a fraction
fn share(field: &str, pct: f64) -> Result<f64> {
    let pct = finite(field, pct)?;
    if !(0.0..=100.0).contains(&pct) {
        return Err(ModelError::invalid(field, format!("must be between 0 and 100, got {}", pct)));
    }
    Ok(fraction(pct))
}

/// Growth or discount rate in percent; must stay above -100%
fn growth_rate(field: &str, pct: f64) -> Result<f64> {
    let pct = finite(field, pct)?;
    if pct <= -100.0 {
        return Err(ModelError::invalid(field, format!("must be greater than -100, got {}", pct)));
    }
    Ok(fraction(pct))
}

fn years(field: &str, value: u32, max: u32) -> Result<u32> {
    if value == 0 || value > max {
        return Err(ModelError::invalid(field, format!("must be between 1 and {}, got {}", max, value)));
    }
    Ok(value)
}

impl Assumptions {
    /// Validate a boundary parameter set and convert its rates to fractions
    pub fn from_parameters(params: &ParameterSet) -> Result<Self> {
        let s = &params.sale;
        let sale = SaleTerms {
            price: amount("sale.sale_price", s.sale_price)?,
            mortgage_balance: amount("sale.mortgage_balance", s.mortgage_balance)?,
            selling_cost_rate: cost_rate("sale.selling_cost_pct", s.selling_cost_pct)?,
            cap_gains_rate: share("sale.cap_gains_pct", s.cap_gains_pct)?,
            appreciation_rate: growth_rate("sale.appreciation_pct", s.appreciation_pct)?,
        };

        let p = &params.purchase;
        let purchase = PurchaseTerms {
            price: amount("purchase.price", p.price)?,
            closing_cost_rate: cost_rate("purchase.closing_cost_pct", p.closing_cost_pct)?,
            down_payment_share: share("purchase.down_payment_pct", p.down_payment_pct)?,
            mortgage_rate: cost_rate("purchase.mortgage_rate_pct", p.mortgage_rate_pct)?,
            mortgage_years: years("purchase.mortgage_years", p.mortgage_years, MAX_MORTGAGE_YEARS)?,
            property_tax_rate: cost_rate("purchase.property_tax_pct", p.property_tax_pct)?,
            insurance_annual: amount("purchase.insurance_annual", p.insurance_annual)?,
            hoa_annual: amount("purchase.hoa_monthly", p.hoa_monthly)? * 12.0,
            maintenance_rate: cost_rate("purchase.maintenance_pct", p.maintenance_pct)?,
            appreciation_rate: growth_rate("purchase.appreciation_pct", p.appreciation_pct)?,
        };

        let l = &params.living;
        let living = LivingCosts {
            monthly_rent: amount("living.monthly_rent", l.monthly_rent)?,
            rent_inflation: growth_rate("living.rent_inflation_pct", l.rent_inflation_pct)?,
            include_storage: l.include_storage,
            storage_monthly: amount("living.storage_monthly", l.storage_monthly)?,
            storage_inflation: growth_rate("living.storage_inflation_pct", l.storage_inflation_pct)?,
        };

        let r = &params.returns;
        finite("returns.index_cagr_pct", r.index_cagr_pct)?;
        finite("returns.manual_return_pct", r.manual_return_pct)?;
        finite("returns.adjustment_pct", r.adjustment_pct)?;
        amount("returns.tax_drag_pct", r.tax_drag_pct)?;
        let net_return = growth_rate("returns (net of adjustment and tax drag)", r.net_return_pct())?;

        let a = &params.allocation;
        let invested = InvestedShares {
            rent: share("allocation.rent_invested_pct", a.rent_invested_pct)?,
            buy: share("allocation.buy_invested_pct", a.buy_invested_pct)?,
            storage: share("allocation.storage_invested_pct", a.storage_invested_pct)?,
        };

        let k = &params.keep_home;
        let keep_home = KeepHomeCosts {
            property_tax: amount("keep_home.property_tax_annual", k.property_tax_annual)?,
            insurance: amount("keep_home.insurance_annual", k.insurance_annual)?,
            hoa: amount("keep_home.hoa_annual", k.hoa_annual)?,
            extra_maintenance: amount("keep_home.extra_maintenance_annual", k.extra_maintenance_annual)?,
        };

        Ok(Self {
            sale,
            purchase,
            living,
            net_return,
            invested,
            keep_home,
            horizon_years: years("horizon_years", params.horizon_years, MAX_HORIZON_YEARS)?,
            discount_rate: growth_rate("discount_rate_pct", params.discount_rate_pct)?,
        })
    }
}

impl TryFrom<&ParameterSet> for Assumptions {
    type Error = ModelError;

    fn try_from(params: &ParameterSet) -> Result<Self> {
        Self::from_parameters(params)
    }
}
