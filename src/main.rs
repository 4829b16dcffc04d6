//! Downsizing Analyzer CLI
//!
//! Command-line interface for running a single projection

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use downsizing_analyzer::{ParameterSet, ProjectionResult, Scenario, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "downsizing_analyzer", version, about = "Compare selling, downsizing, renting, and keeping a home")]
struct Cli {
    /// JSON parameter file (missing fields use the built-in defaults)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Override the projection horizon, years
    #[arg(long)]
    horizon: Option<u32>,

    /// Override the NPV discount rate, %
    #[arg(long)]
    discount_rate: Option<f64>,

    /// Print the full result as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Write the year-by-year snapshots to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the effective parameter set as JSON and exit
    #[arg(long)]
    print_defaults: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut params = match &cli.params {
        Some(path) => ParameterSet::from_json_path(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => ParameterSet::default(),
    };
    if let Some(horizon) = cli.horizon {
        params.horizon_years = horizon;
    }
    if let Some(rate) = cli.discount_rate {
        params.discount_rate_pct = rate;
    }

    let runner = ScenarioRunner::with_parameters(params);

    if cli.print_defaults {
        println!("{}", serde_json::to_string_pretty(runner.parameters())?);
        return Ok(());
    }

    let result = runner.run().context("projection failed")?;

    if let Some(path) = &cli.csv {
        downsizing_analyzer::report::write_snapshots_csv(path, &result.snapshots)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !cli.json {
            println!("Year-by-year snapshots written to: {}", path.display());
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    Ok(())
}

fn print_report(result: &ProjectionResult) {
    println!("Downsizing Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    let p = &result.proceeds;
    println!("Sale of current home:");
    println!("  Gross Sale:        ${:.2}", p.gross_sale);
    println!("  Selling Costs:     ${:.2}", p.selling_costs);
    println!("  Equity Before Tax: ${:.2}", p.equity_before_tax);
    println!("  Cap Gains Tax:     ${:.2}", p.cap_gains_tax);
    println!("  Net Proceeds:      ${:.2}", p.net_proceeds);
    println!();
    println!("Net investment return: {:.2}%", result.net_return * 100.0);
    println!(
        "Smaller home: down payment ${:.2}, mortgage ${:.2}, payment ${:.2}/month",
        result.down_payment, result.mortgage_principal, result.monthly_payment
    );
    println!();

    println!("Projection Results ({} years):", result.snapshots.len());
    println!("{:>4} {:>14} {:>14} {:>14} {:>14} {:>12}", "Year", "NetWorth A", "NetWorth B", "NetWorth C", "NetWorth D", "Mortgage");
    println!("{}", "-".repeat(78));
    for snapshot in &result.snapshots {
        println!(
            "{:>4} {:>14.0} {:>14.0} {:>14.0} {:>14.0} {:>12.0}",
            snapshot.year,
            snapshot.scenario(Scenario::Rent).net_worth,
            snapshot.scenario(Scenario::BuySmaller).net_worth,
            snapshot.scenario(Scenario::RentWithStorage).net_worth,
            snapshot.scenario(Scenario::KeepHome).net_worth,
            snapshot.scenario(Scenario::BuySmaller).remaining_principal,
        );
    }

    println!("\nRanking (NPV incl. terminal):");
    for (rank, r) in result.ranking().iter().enumerate() {
        println!(
            "  {}. {:<28} NPV ${:>14.2}  Terminal ${:>14.2}",
            rank + 1,
            r.label,
            r.npv,
            r.terminal_value
        );
    }
    println!("\nBest: {}", result.best().label);
}
