//! Downsizing Analyzer - deterministic projection engine for housing strategies
//!
//! This library provides:
//! - Sale proceeds, mortgage amortization, and discounting primitives
//! - A yearly projection of four strategies: sell & rent, sell & buy smaller,
//!   sell & rent with storage, keep the current home
//! - NPV valuation and ranking of the strategies
//! - Parallel batch runs and one-at-a-time sensitivity sweeps

pub mod error;
pub mod assumptions;
pub mod finance;
pub mod projection;
pub mod scenario;
pub mod sensitivity;
pub mod report;

// Re-export commonly used types
pub use error::{ModelError, Result};
pub use assumptions::{Assumptions, ParameterSet};
pub use projection::{ProjectionEngine, ProjectionResult, YearlySnapshot, ScenarioYear};
pub use scenario::{Scenario, ScenarioResult, ScenarioRunner};
