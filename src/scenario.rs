//! Scenarios, their valuation results, ranking, and a batch runner
//!
//! The runner holds a base parameter set and runs any number of independent
//! projections against it or against caller-supplied variants.

use std::fmt;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::ParameterSet;
use crate::error::Result;
use crate::projection::{ProjectionEngine, ProjectionResult};

/// The four housing strategies, in their fixed reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// A: sell and rent, invest the proceeds
    Rent,
    /// B: sell and buy a smaller home, invest what is left
    BuySmaller,
    /// C: sell and rent with storage, invest only part of the proceeds
    RentWithStorage,
    /// D: keep the current home
    KeepHome,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Rent,
        Scenario::BuySmaller,
        Scenario::RentWithStorage,
        Scenario::KeepHome,
    ];

    /// Position in `ALL` and in every per-scenario array
    pub fn index(self) -> usize {
        match self {
            Scenario::Rent => 0,
            Scenario::BuySmaller => 1,
            Scenario::RentWithStorage => 2,
            Scenario::KeepHome => 3,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Scenario::Rent => "A",
            Scenario::BuySmaller => "B",
            Scenario::RentWithStorage => "C",
            Scenario::KeepHome => "D",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Rent => "A: Sell & Rent",
            Scenario::BuySmaller => "B: Sell & Buy Smaller",
            Scenario::RentWithStorage => "C: Sell & Rent + Storage",
            Scenario::KeepHome => "D: Keep Current Home",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Discounted valuation of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub label: String,
    /// NPV of the cash-flow vector, terminal value included
    pub npv: f64,
    pub terminal_value: f64,
    /// [upfront, year 1..N outflows, terminal value]
    pub cash_flows: Vec<f64>,
}

/// Highest-NPV result; ties go to the earliest scenario in A, B, C, D order
pub fn best_result(results: &[ScenarioResult]) -> Option<&ScenarioResult> {
    results.iter().fold(None, |best, candidate| match best {
        Some(current) if current.npv >= candidate.npv => Some(current),
        _ => Some(candidate),
    })
}

/// Results ordered by descending NPV, ties kept in scenario order
pub fn rank_results(results: &[ScenarioResult]) -> Vec<&ScenarioResult> {
    let mut ranked: Vec<&ScenarioResult> = results.iter().collect();
    ranked.sort_by(|a, b| {
        b.npv
            .partial_cmp(&a.npv)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Runner for one or many independent projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let result = runner.run()?;
/// println!("best: {}", result.best().label);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_parameters: ParameterSet,
}

impl ScenarioRunner {
    /// Runner over the built-in reference parameters
    pub fn new() -> Self {
        Self {
            base_parameters: ParameterSet::default(),
        }
    }

    pub fn with_parameters(parameters: ParameterSet) -> Self {
        Self {
            base_parameters: parameters,
        }
    }

    /// Runner over a JSON parameter file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        Ok(Self::with_parameters(ParameterSet::from_json_path(path)?))
    }

    /// Project the base parameter set
    pub fn run(&self) -> Result<ProjectionResult> {
        self.run_with(&self.base_parameters)
    }

    /// Project an arbitrary parameter set
    pub fn run_with(&self, parameters: &ParameterSet) -> Result<ProjectionResult> {
        ProjectionEngine::from_parameters(parameters)?.project()
    }

    /// Project many parameter sets in parallel; results keep input order
    pub fn run_batch(&self, parameter_sets: &[ParameterSet]) -> Vec<Result<ProjectionResult>> {
        parameter_sets
            .par_iter()
            .map(|parameters| self.run_with(parameters))
            .collect()
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.base_parameters
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(scenario: Scenario, npv: f64) -> ScenarioResult {
        ScenarioResult {
            scenario,
            label: scenario.label().to_string(),
            npv,
            terminal_value: 0.0,
            cash_flows: Vec::new(),
        }
    }

    #[test]
    fn test_scenario_order_and_keys() {
        for (i, scenario) in Scenario::ALL.iter().enumerate() {
            assert_eq!(scenario.index(), i);
        }
        let keys: Vec<_> = Scenario::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(keys, ["A", "B", "C", "D"]);
        assert_eq!(Scenario::KeepHome.to_string(), "D");
    }

    #[test]
    fn test_best_picks_maximum() {
        let results = [
            result(Scenario::Rent, 10.0),
            result(Scenario::BuySmaller, 30.0),
            result(Scenario::RentWithStorage, 20.0),
            result(Scenario::KeepHome, -5.0),
        ];
        assert_eq!(best_result(&results).unwrap().scenario, Scenario::BuySmaller);
    }

    #[test]
    fn test_ties_resolve_to_first() {
        let results = [
            result(Scenario::Rent, 5.0),
            result(Scenario::BuySmaller, 7.0),
            result(Scenario::RentWithStorage, 7.0),
            result(Scenario::KeepHome, 7.0),
        ];
        assert_eq!(best_result(&results).unwrap().scenario, Scenario::BuySmaller);

        let ranked: Vec<_> = rank_results(&results).iter().map(|r| r.scenario).collect();
        assert_eq!(
            ranked,
            [
                Scenario::BuySmaller,
                Scenario::RentWithStorage,
                Scenario::KeepHome,
                Scenario::Rent
            ]
        );
    }

    #[test]
    fn test_best_of_empty_is_none() {
        assert!(best_result(&[]).is_none());
    }

    #[test]
    fn test_runner_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let parameter_sets: Vec<_> = [5, 10, 20]
            .iter()
            .map(|&years| ParameterSet {
                horizon_years: years,
                ..Default::default()
            })
            .collect();

        let results = runner.run_batch(&parameter_sets);
        assert_eq!(results.len(), 3);
        for (result, years) in results.iter().zip([5usize, 10, 20]) {
            assert_eq!(result.as_ref().unwrap().snapshots.len(), years);
        }
    }

    #[test]
    fn test_runner_keeps_base_parameters() {
        let base = ParameterSet {
            horizon_years: 8,
            ..Default::default()
        };
        let runner = ScenarioRunner::with_parameters(base.clone());
        assert_eq!(runner.parameters(), &base);
        assert_eq!(runner.run().unwrap().snapshots.len(), 8);
    }

    #[test]
    fn test_runner_surfaces_validation_errors() {
        let runner = ScenarioRunner::new();
        let bad = ParameterSet {
            horizon_years: 0,
            ..Default::default()
        };
        let results = runner.run_batch(&[ParameterSet::default(), bad]);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
