//! Sweep one parameter across a range and compare scenario NPVs
//!
//! Usage: cargo run --bin sensitivity_sweep -- --field discount-rate --from 3 --to 8 --step 0.5

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use downsizing_analyzer::report::write_sweep_csv;
use downsizing_analyzer::sensitivity::{sweep, value_range, SweepField};
use downsizing_analyzer::{ParameterSet, Scenario};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "sensitivity_sweep", version, about = "One-at-a-time sensitivity sweep")]
struct Args {
    /// Parameter to vary
    #[arg(long, value_enum)]
    field: SweepField,

    /// First value (same units as the parameter file)
    #[arg(long)]
    from: f64,

    /// Last value, inclusive
    #[arg(long)]
    to: f64,

    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Base JSON parameter file (defaults when omitted)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Write the sweep table to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print JSON output
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SweepResponse<'a> {
    field: SweepField,
    point_count: usize,
    points: &'a [downsizing_analyzer::sensitivity::SensitivityPoint],
    execution_time_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let base = match &args.params {
        Some(path) => ParameterSet::from_json_path(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => ParameterSet::default(),
    };

    let values = value_range(args.from, args.to, args.step)?;
    let points = sweep(&base, args.field, &values)
        .with_context(|| format!("sweep over {:?} failed", args.field))?;

    if let Some(path) = &args.csv {
        write_sweep_csv(path, &points)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if args.json {
        let response = SweepResponse {
            field: args.field,
            point_count: points.len(),
            points: &points,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    println!("Sensitivity of scenario NPV to {:?}", args.field);
    println!("{:>10} {:>14} {:>14} {:>14} {:>14} {:>5}", "Value", "NPV A", "NPV B", "NPV C", "NPV D", "Best");
    println!("{}", "-".repeat(77));
    for point in &points {
        println!(
            "{:>10.3} {:>14.0} {:>14.0} {:>14.0} {:>14.0} {:>5}",
            point.value,
            point.npv[Scenario::Rent.index()],
            point.npv[Scenario::BuySmaller.index()],
            point.npv[Scenario::RentWithStorage.index()],
            point.npv[Scenario::KeepHome.index()],
            point.best.key(),
        );
    }
    if let Some(path) = &args.csv {
        println!("\nSweep written to {}", path.display());
    }
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
