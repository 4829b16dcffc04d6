//! Core projection engine: advances all four scenarios year by year

use crate::assumptions::{Assumptions, ParameterSet};
use crate::error::Result;
use crate::finance::{AmortizationSchedule, SaleProceeds};
use crate::scenario::Scenario;
use super::snapshots::{ProjectionResult, YearlySnapshot};
use super::state::{KeepHomeState, LivingCostState, OwnershipState, ProjectionState, RentingState};
use super::valuation;

/// How the smaller home is financed out of the sale proceeds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchasePlan {
    pub down_payment: f64,
    pub closing_costs: f64,
    pub mortgage_principal: f64,
    /// Net proceeds left after the down payment
    pub leftover_proceeds: f64,
}

impl PurchasePlan {
    /// Cash paid at purchase, recorded at t=0 of scenario B.
    /// Uses the same down payment that sizes the mortgage, so cash paid and
    /// amount borrowed always sum to the price.
    pub fn upfront_cost(&self) -> f64 {
        self.down_payment + self.closing_costs
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Validate boundary parameters and build an engine over them
    pub fn from_parameters(parameters: &ParameterSet) -> Result<Self> {
        Ok(Self::new(Assumptions::from_parameters(parameters)?))
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Down payment, closing costs, and loan size for scenario B.
    /// The down payment is clamped to [0, price].
    pub fn purchase_plan(&self, proceeds: &SaleProceeds) -> PurchasePlan {
        let purchase = &self.assumptions.purchase;
        let requested = proceeds.net_proceeds * purchase.down_payment_share;
        let down_payment = requested.clamp(0.0, purchase.price);
        if down_payment != requested {
            log::warn!(
                "down payment {:.2} clamped to {:.2} (home price {:.2})",
                requested,
                down_payment,
                purchase.price
            );
        }

        PurchasePlan {
            down_payment,
            closing_costs: purchase.closing_costs(),
            mortgage_principal: purchase.price - down_payment,
            leftover_proceeds: proceeds.net_proceeds - down_payment,
        }
    }

    fn initial_state(&self, proceeds: &SaleProceeds, plan: &PurchasePlan) -> ProjectionState {
        let a = &self.assumptions;
        ProjectionState {
            year: 0,
            living: LivingCostState::from_costs(&a.living),
            rent: RentingState::new(proceeds.net_proceeds, a.invested.rent),
            buy: OwnershipState::new(
                plan.leftover_proceeds,
                a.invested.buy,
                a.purchase.price,
                plan.mortgage_principal,
            ),
            storage: RentingState::new(proceeds.net_proceeds, a.invested.storage),
            keep: KeepHomeState {
                home_value: a.sale.price,
            },
        }
    }

    /// Run the full projection
    pub fn project(&self) -> Result<ProjectionResult> {
        let a = &self.assumptions;
        let proceeds = SaleProceeds::from_terms(&a.sale);
        let plan = self.purchase_plan(&proceeds);
        let schedule = AmortizationSchedule::new(
            plan.mortgage_principal,
            a.purchase.mortgage_rate,
            a.purchase.mortgage_years,
        )?;

        log::info!(
            "projecting {} years: net proceeds {:.2}, net return {:.4}, mortgage {:.2} at {:.2}/month",
            a.horizon_years,
            proceeds.net_proceeds,
            a.net_return,
            plan.mortgage_principal,
            schedule.monthly_payment()
        );

        let mut state = self.initial_state(&proceeds, &plan);
        let mut snapshots = Vec::with_capacity(a.horizon_years as usize);

        for _year in 1..=a.horizon_years {
            let snapshot = self.project_year(&mut state, &schedule);
            snapshot.check_finite()?;
            snapshots.push(snapshot);
        }

        let mut upfront = [0.0; 4];
        upfront[Scenario::BuySmaller.index()] = -plan.upfront_cost();
        let results = valuation::evaluate(&snapshots, upfront, a.discount_rate)?;

        let result = ProjectionResult {
            proceeds,
            net_return: a.net_return,
            down_payment: plan.down_payment,
            mortgage_principal: plan.mortgage_principal,
            monthly_payment: schedule.monthly_payment(),
            snapshots,
            results,
        };

        let best = result.best();
        log::info!("best scenario {} with NPV {:.2}", best.label, best.npv);

        Ok(result)
    }

    /// Advance every scenario by one year and record the snapshot.
    /// Rent and storage are charged at this year's prices, then inflated.
    fn project_year(&self, state: &mut ProjectionState, schedule: &AmortizationSchedule) -> YearlySnapshot {
        let a = &self.assumptions;
        state.year += 1;

        let annual_rent = state.living.annual_rent();
        let annual_storage = state.living.annual_storage();
        state.living.inflate();

        let rent = state.rent.advance(a.net_return, annual_rent, annual_storage);
        let buy = state.buy.advance(a.net_return, &a.purchase, schedule);
        let storage = state.storage.advance(a.net_return, annual_rent, annual_storage);
        let keep = state.keep.advance(a.sale.appreciation_rate, &a.keep_home);

        log::debug!(
            "year {}: net worth A={:.0} B={:.0} C={:.0} D={:.0}, mortgage {:.0}",
            state.year,
            rent.net_worth,
            buy.net_worth,
            storage.net_worth,
            keep.net_worth,
            buy.remaining_principal
        );

        YearlySnapshot {
            year: state.year,
            scenarios: [rent, buy, storage, keep],
        }
    }
}
