//! Discounted cash-flow valuation of projected scenarios
//!
//! Each scenario's vector is laid out as
//! `[upfront, -outflow(1), ..., -outflow(N), terminal]`, so the terminal value
//! sits at position N+1 and is discounted one period past the last outflow.

use crate::error::{ModelError, Result};
use crate::finance::npv;
use crate::scenario::{Scenario, ScenarioResult};
use super::snapshots::YearlySnapshot;

/// Cash flows of one scenario, before discounting
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowVector {
    /// Transaction at t=0 (negative for a purchase)
    pub upfront: f64,
    /// Negated annual outflows, years 1..N
    pub annual: Vec<f64>,
    pub terminal: f64,
}

impl CashFlowVector {
    pub fn for_scenario(scenario: Scenario, snapshots: &[YearlySnapshot], upfront: f64) -> Self {
        let annual = snapshots
            .iter()
            .map(|s| -s.scenario(scenario).annual_outflow)
            .collect();
        let terminal = snapshots
            .last()
            .map(|s| s.scenario(scenario).terminal_value())
            .unwrap_or(0.0);

        Self {
            upfront,
            annual,
            terminal,
        }
    }

    /// Flattened vector in discounting order
    pub fn to_vec(&self) -> Vec<f64> {
        let mut flows = Vec::with_capacity(self.annual.len() + 2);
        flows.push(self.upfront);
        flows.extend_from_slice(&self.annual);
        flows.push(self.terminal);
        flows
    }

    pub fn npv(&self, discount_rate: f64) -> f64 {
        npv(&self.to_vec(), discount_rate)
    }
}

/// Value all four scenarios; `upfront` is indexed by `Scenario::index`
pub fn evaluate(
    snapshots: &[YearlySnapshot],
    upfront: [f64; 4],
    discount_rate: f64,
) -> Result<[ScenarioResult; 4]> {
    let results = Scenario::ALL.map(|scenario| {
        let vector = CashFlowVector::for_scenario(scenario, snapshots, upfront[scenario.index()]);
        let cash_flows = vector.to_vec();
        ScenarioResult {
            scenario,
            label: scenario.label().to_string(),
            npv: npv(&cash_flows, discount_rate),
            terminal_value: vector.terminal,
            cash_flows,
        }
    });

    let final_year = snapshots.last().map(|s| s.year).unwrap_or(0);
    for result in &results {
        if !result.npv.is_finite() {
            return Err(ModelError::NonFinite {
                scenario: result.scenario,
                year: final_year,
                quantity: "net present value",
            });
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ScenarioYear;
    use approx::assert_abs_diff_eq;

    fn snapshots(outflows: &[f64], terminal_invested: f64) -> Vec<YearlySnapshot> {
        outflows
            .iter()
            .enumerate()
            .map(|(i, &outflow)| {
                let year = ScenarioYear {
                    annual_outflow: outflow,
                    invested_balance: terminal_invested,
                    ..Default::default()
                };
                YearlySnapshot {
                    year: i as u32 + 1,
                    scenarios: [year; 4],
                }
            })
            .collect()
    }

    #[test]
    fn test_vector_layout() {
        let history = snapshots(&[100.0, 200.0, 300.0], 5_000.0);
        let vector = CashFlowVector::for_scenario(Scenario::Rent, &history, -50.0);

        assert_eq!(vector.to_vec(), vec![-50.0, -100.0, -200.0, -300.0, 5_000.0]);
    }

    #[test]
    fn test_zero_discount_npv_is_sum() {
        let history = snapshots(&[1_000.0, 1_000.0], 10_000.0);
        let results = evaluate(&history, [0.0, -2_500.0, 0.0, 0.0], 0.0).unwrap();

        for result in &results {
            assert_eq!(result.npv, result.cash_flows.iter().sum::<f64>());
        }
        assert_eq!(results[Scenario::BuySmaller.index()].npv, 5_500.0);
    }

    #[test]
    fn test_terminal_discounted_one_period_past_horizon() {
        // No outflows: NPV is just the terminal at exponent N+1
        let horizon = 4;
        let history = snapshots(&vec![0.0; horizon], 10_000.0);
        let results = evaluate(&history, [0.0; 4], 0.05).unwrap();

        let expected = 10_000.0 / 1.05_f64.powi(horizon as i32 + 1);
        assert_abs_diff_eq!(results[0].npv, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_results_in_fixed_order() {
        let history = snapshots(&[1.0], 1.0);
        let results = evaluate(&history, [0.0; 4], 0.03).unwrap();
        let order: Vec<_> = results.iter().map(|r| r.scenario).collect();
        assert_eq!(order, Scenario::ALL);
        assert_eq!(results[3].label, "D: Keep Current Home");
    }

    #[test]
    fn test_non_finite_npv_is_error() {
        let history = snapshots(&[f64::INFINITY], 0.0);
        assert!(matches!(
            evaluate(&history, [0.0; 4], 0.05),
            Err(ModelError::NonFinite { quantity: "net present value", .. })
        ));
    }
}
