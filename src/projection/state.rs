//! Per-scenario state carried from one projection year to the next

use crate::assumptions::{KeepHomeCosts, LivingCosts, PurchaseTerms};
use crate::finance::{AmortizationSchedule, LoanState};
use super::snapshots::ScenarioYear;

/// Rent and storage at the current year's prices
#[derive(Debug, Clone)]
pub struct LivingCostState {
    pub monthly_rent: f64,
    pub monthly_storage: f64,
    pub include_storage: bool,
    rent_inflation: f64,
    storage_inflation: f64,
}

impl LivingCostState {
    pub fn from_costs(costs: &LivingCosts) -> Self {
        Self {
            monthly_rent: costs.monthly_rent,
            monthly_storage: costs.storage_monthly,
            include_storage: costs.include_storage,
            rent_inflation: costs.rent_inflation,
            storage_inflation: costs.storage_inflation,
        }
    }

    pub fn annual_rent(&self) -> f64 {
        self.monthly_rent * 12.0
    }

    /// Zero when storage is not included
    pub fn annual_storage(&self) -> f64 {
        if self.include_storage {
            self.monthly_storage * 12.0
        } else {
            0.0
        }
    }

    /// Move prices forward one year
    pub fn inflate(&mut self) {
        self.monthly_rent *= 1.0 + self.rent_inflation;
        self.monthly_storage *= 1.0 + self.storage_inflation;
    }
}

/// Sell-and-rent household: invested proceeds plus idle cash (A and C)
#[derive(Debug, Clone)]
pub struct RentingState {
    pub invested: f64,
    pub held_cash: f64,
}

impl RentingState {
    /// Split `proceeds` into an invested share and cash
    pub fn new(proceeds: f64, invested_share: f64) -> Self {
        let invested = proceeds * invested_share;
        Self {
            invested,
            held_cash: proceeds - invested,
        }
    }

    /// Grow the portfolio one year and record this year's rent and storage.
    /// Outflows are funded from income, not withdrawn from the portfolio.
    pub fn advance(&mut self, net_return: f64, annual_rent: f64, annual_storage: f64) -> ScenarioYear {
        self.invested *= 1.0 + net_return;

        let mut year = ScenarioYear {
            invested_balance: self.invested,
            held_cash: self.held_cash,
            annual_outflow: annual_rent + annual_storage,
            carrying_cost: annual_storage,
            ..Default::default()
        };
        year.net_worth = year.terminal_value() - year.annual_outflow;
        year
    }
}

/// Sell-and-downsize household: new home, mortgage, leftover proceeds (B)
#[derive(Debug, Clone)]
pub struct OwnershipState {
    pub invested: f64,
    pub held_cash: f64,
    pub home_value: f64,
    pub loan: LoanState,
}

impl OwnershipState {
    pub fn new(leftover_proceeds: f64, invested_share: f64, home_price: f64, mortgage_principal: f64) -> Self {
        let invested = leftover_proceeds * invested_share;
        Self {
            invested,
            held_cash: leftover_proceeds - invested,
            home_value: home_price,
            loan: LoanState::new(mortgage_principal),
        }
    }

    /// One year of ownership: twelve mortgage payments, value-based taxes and
    /// maintenance on the opening home value, then appreciation.
    pub fn advance(
        &mut self,
        net_return: f64,
        terms: &PurchaseTerms,
        schedule: &AmortizationSchedule,
    ) -> ScenarioYear {
        self.invested *= 1.0 + net_return;

        let loan_year = schedule.advance_year(self.loan);
        self.loan = loan_year.closing;

        let property_tax = self.home_value * terms.property_tax_rate;
        let maintenance = self.home_value * terms.maintenance_rate;
        let carrying_cost = property_tax + maintenance + terms.insurance_annual + terms.hoa_annual;

        self.home_value *= 1.0 + terms.appreciation_rate;

        let mut year = ScenarioYear {
            invested_balance: self.invested,
            held_cash: self.held_cash,
            annual_outflow: loan_year.interest_paid + carrying_cost,
            carrying_cost,
            interest_paid: loan_year.interest_paid,
            principal_paid: loan_year.principal_paid,
            remaining_principal: self.loan.balance(),
            asset_value: self.home_value,
            net_worth: 0.0,
        };
        year.net_worth = year.terminal_value() - year.annual_outflow;
        year
    }
}

/// Household that stays put (D)
#[derive(Debug, Clone)]
pub struct KeepHomeState {
    pub home_value: f64,
}

impl KeepHomeState {
    pub fn advance(&mut self, appreciation_rate: f64, costs: &KeepHomeCosts) -> ScenarioYear {
        self.home_value *= 1.0 + appreciation_rate;

        let carrying_cost = costs.annual_total();
        ScenarioYear {
            annual_outflow: carrying_cost,
            carrying_cost,
            asset_value: self.home_value,
            net_worth: self.home_value - carrying_cost,
            ..Default::default()
        }
    }
}

/// Combined state of all four scenarios between years
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Last completed projection year (0 before the first)
    pub year: u32,
    pub living: LivingCostState,
    pub rent: RentingState,
    pub buy: OwnershipState,
    pub storage: RentingState,
    pub keep: KeepHomeState,
}
