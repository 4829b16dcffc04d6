//! One-at-a-time sensitivity sweeps
//!
//! A sweep clones the base parameter set once per value, overrides a single
//! field, and projects every variant independently in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::ParameterSet;
use crate::error::{ModelError, Result};
use crate::projection::ProjectionEngine;
use crate::scenario::Scenario;

/// Parameter varied by a sweep. Values are in the same units as `ParameterSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SweepField {
    /// Manual baseline return, %
    InvestmentReturn,
    /// Tax drag on returns, %
    TaxDrag,
    /// NPV discount rate, %
    DiscountRate,
    /// Annual rent inflation, %
    RentInflation,
    /// Smaller-home appreciation, %
    HomeAppreciation,
    /// Current-home appreciation, %
    CurrentHomeAppreciation,
    /// Mortgage rate on the smaller home, %
    MortgageRate,
    /// Share of net proceeds used as down payment, %
    DownPayment,
    /// Projection horizon, years (rounded)
    Horizon,
}

impl SweepField {
    /// Write `value` into the matching field of `params`
    pub fn apply(self, params: &mut ParameterSet, value: f64) {
        match self {
            SweepField::InvestmentReturn => params.returns.manual_return_pct = value,
            SweepField::TaxDrag => params.returns.tax_drag_pct = value,
            SweepField::DiscountRate => params.discount_rate_pct = value,
            SweepField::RentInflation => params.living.rent_inflation_pct = value,
            SweepField::HomeAppreciation => params.purchase.appreciation_pct = value,
            SweepField::CurrentHomeAppreciation => params.sale.appreciation_pct = value,
            SweepField::MortgageRate => params.purchase.mortgage_rate_pct = value,
            SweepField::DownPayment => params.purchase.down_payment_pct = value,
            SweepField::Horizon => params.horizon_years = value.round().max(0.0) as u32,
        }
    }
}

/// Outcome of one sweep value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub field: SweepField,
    pub value: f64,
    /// NPV per scenario, A..D
    pub npv: [f64; 4],
    pub best: Scenario,
}

/// Most values a single sweep may request
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Evenly spaced values from `from` to `to` inclusive
pub fn value_range(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !from.is_finite() || !to.is_finite() {
        return Err(ModelError::invalid("range", "bounds must be finite"));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(ModelError::invalid("step", format!("must be positive, got {}", step)));
    }
    if to < from {
        return Err(ModelError::invalid("range", format!("end {} is below start {}", to, from)));
    }

    let steps = ((to - from) / step + 1e-9).floor();
    if steps >= MAX_SWEEP_POINTS as f64 {
        return Err(ModelError::invalid(
            "step",
            format!("range would produce more than {} values", MAX_SWEEP_POINTS),
        ));
    }
    let count = steps as usize + 1;
    Ok((0..count).map(|i| from + step * i as f64).collect())
}

/// Project `base` once per value with `field` overridden
pub fn sweep(base: &ParameterSet, field: SweepField, values: &[f64]) -> Result<Vec<SensitivityPoint>> {
    log::info!("sweeping {:?} over {} values", field, values.len());

    values
        .par_iter()
        .map(|&value| {
            let mut params = base.clone();
            field.apply(&mut params, value);
            let result = ProjectionEngine::from_parameters(&params)?.project()?;
            Ok(SensitivityPoint {
                field,
                value,
                npv: result.results.each_ref().map(|r| r.npv),
                best: result.best().scenario,
            })
        })
        .collect()
}
