//! Tabular CSV output for snapshots and sweeps

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::projection::YearlySnapshot;
use crate::scenario::Scenario;
use crate::sensitivity::{SensitivityPoint, SweepField};

/// One scenario-year in long format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRow {
    pub year: u32,
    pub scenario: &'static str,
    pub invested_balance: f64,
    pub held_cash: f64,
    pub annual_outflow: f64,
    pub carrying_cost: f64,
    pub interest_paid: f64,
    pub principal_paid: f64,
    pub remaining_principal: f64,
    pub asset_value: f64,
    pub net_worth: f64,
}

/// Flatten snapshots into rows ordered by year, then scenario
pub fn snapshot_rows(snapshots: &[YearlySnapshot]) -> Vec<SnapshotRow> {
    snapshots
        .iter()
        .flat_map(|snapshot| {
            Scenario::ALL.into_iter().map(move |scenario| {
                let s = snapshot.scenario(scenario);
                SnapshotRow {
                    year: snapshot.year,
                    scenario: scenario.key(),
                    invested_balance: s.invested_balance,
                    held_cash: s.held_cash,
                    annual_outflow: s.annual_outflow,
                    carrying_cost: s.carrying_cost,
                    interest_paid: s.interest_paid,
                    principal_paid: s.principal_paid,
                    remaining_principal: s.remaining_principal,
                    asset_value: s.asset_value,
                    net_worth: s.net_worth,
                }
            })
        })
        .collect()
}

pub fn write_snapshots<W: Write>(writer: W, snapshots: &[YearlySnapshot]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in snapshot_rows(snapshots) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_snapshots_csv(path: &Path, snapshots: &[YearlySnapshot]) -> Result<()> {
    write_snapshots(std::fs::File::create(path)?, snapshots)
}

/// One sweep point in wide format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub field: SweepField,
    pub value: f64,
    pub npv_a: f64,
    pub npv_b: f64,
    pub npv_c: f64,
    pub npv_d: f64,
    pub best: &'static str,
}

impl From<&SensitivityPoint> for SweepRow {
    fn from(point: &SensitivityPoint) -> Self {
        let [npv_a, npv_b, npv_c, npv_d] = point.npv;
        Self {
            field: point.field,
            value: point.value,
            npv_a,
            npv_b,
            npv_c,
            npv_d,
            best: point.best.key(),
        }
    }
}

pub fn write_sweep<W: Write>(writer: W, points: &[SensitivityPoint]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in points {
        csv_writer.serialize(SweepRow::from(point))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_sweep_csv(path: &Path, points: &[SensitivityPoint]) -> Result<()> {
    write_sweep(std::fs::File::create(path)?, points)
}
