//! Year-by-year output structures for projections

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::finance::SaleProceeds;
use crate::scenario::{best_result, rank_results, Scenario, ScenarioResult};

/// One scenario's position at the end of a projection year
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioYear {
    /// Invested balance after this year's growth
    pub invested_balance: f64,
    /// Proceeds held as cash (no return)
    pub held_cash: f64,
    /// Total cash paid out this year
    pub annual_outflow: f64,
    /// Storage (A, C), non-interest ownership costs (B), or the carrying bill (D)
    pub carrying_cost: f64,
    pub interest_paid: f64,
    pub principal_paid: f64,
    pub remaining_principal: f64,
    /// Home value after this year's appreciation
    pub asset_value: f64,
    /// Liquidatable assets less debt, less this year's outflow
    pub net_worth: f64,
}

impl ScenarioYear {
    /// Value of everything the household could liquidate at year end
    pub fn terminal_value(&self) -> f64 {
        self.invested_balance + self.held_cash + self.asset_value - self.remaining_principal
    }

    fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("invested balance", self.invested_balance),
            ("held cash", self.held_cash),
            ("annual outflow", self.annual_outflow),
            ("carrying cost", self.carrying_cost),
            ("interest paid", self.interest_paid),
            ("principal paid", self.principal_paid),
            ("remaining principal", self.remaining_principal),
            ("asset value", self.asset_value),
            ("net worth", self.net_worth),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}

/// All four scenarios at the end of one projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySnapshot {
    /// Projection year, 1-indexed
    pub year: u32,
    /// Indexed by `Scenario::index`
    pub scenarios: [ScenarioYear; 4],
}

impl YearlySnapshot {
    pub fn scenario(&self, scenario: Scenario) -> &ScenarioYear {
        &self.scenarios[scenario.index()]
    }

    /// Error on the first NaN or infinite figure in this snapshot
    pub fn check_finite(&self) -> Result<()> {
        for scenario in Scenario::ALL {
            if let Some(quantity) = self.scenario(scenario).first_non_finite() {
                return Err(ModelError::NonFinite {
                    scenario,
                    year: self.year,
                    quantity,
                });
            }
        }
        Ok(())
    }
}

/// Complete projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub proceeds: SaleProceeds,
    /// Net annual investment return as a fraction
    pub net_return: f64,
    /// Scenario B down payment taken from net proceeds
    pub down_payment: f64,
    pub mortgage_principal: f64,
    pub monthly_payment: f64,

    /// One snapshot per year, years 1..N in order
    pub snapshots: Vec<YearlySnapshot>,

    /// Valuations in A, B, C, D order
    pub results: [ScenarioResult; 4],
}

impl ProjectionResult {
    pub fn result(&self, scenario: Scenario) -> &ScenarioResult {
        &self.results[scenario.index()]
    }

    /// Highest-NPV scenario
    pub fn best(&self) -> &ScenarioResult {
        best_result(&self.results).unwrap_or(&self.results[0])
    }

    /// Scenarios from best to worst NPV
    pub fn ranking(&self) -> Vec<&ScenarioResult> {
        rank_results(&self.results)
    }

    pub fn final_snapshot(&self) -> Option<&YearlySnapshot> {
        self.snapshots.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let best = self.best();
        let total_outflow = |scenario: Scenario| -> f64 {
            self.snapshots
                .iter()
                .map(|s| s.scenario(scenario).annual_outflow)
                .sum()
        };

        ProjectionSummary {
            horizon_years: self.snapshots.len() as u32,
            net_proceeds: self.proceeds.net_proceeds,
            best: best.scenario,
            best_npv: best.npv,
            npv: self.results.each_ref().map(|r| r.npv),
            terminal_value: self.results.each_ref().map(|r| r.terminal_value),
            total_outflow: Scenario::ALL.map(total_outflow),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub net_proceeds: f64,
    pub best: Scenario,
    pub best_npv: f64,
    /// Per scenario, A..D
    pub npv: [f64; 4],
    pub terminal_value: [f64; 4],
    /// Undiscounted sum of annual outflows
    pub total_outflow: [f64; 4],
}
