//! Year-by-year projection of the four housing scenarios

mod state;
mod engine;
mod snapshots;
pub mod valuation;

pub use state::{KeepHomeState, LivingCostState, OwnershipState, ProjectionState, RentingState};
pub use engine::{ProjectionEngine, PurchasePlan};
pub use snapshots::{ProjectionResult, ProjectionSummary, ScenarioYear, YearlySnapshot};
pub use valuation::CashFlowVector;
