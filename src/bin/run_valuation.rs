//! Run the segmented valuation for a scenario and print the results
//!
//! With no arguments this values the canonical three-segment scenario as
//! of the approval date. A JSON scenario file overrides any subset of the
//! assumptions; a CSV forecast file replaces the built-in projections.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use valuation_system::report::{returns_summary, valuation_table};
use valuation_system::segment::{load_forecast, ScenarioParams};
use valuation_system::valuation::value_portfolio;
use valuation_system::{compute_returns, ValuationError};

#[derive(Parser, Debug)]
#[command(name = "run_valuation", about = "Sum-of-the-parts segment valuation")]
struct Args {
    /// Scenario assumptions as JSON; omitted fields use the standard defaults
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Forecast table as CSV (segment,year,revenue,ebitda) replacing the
    /// built-in projections
    #[arg(long)]
    forecast: Option<PathBuf>,

    /// Valuation as-of date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Write the per-segment valuation table to a CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params: ScenarioParams = match &args.scenario {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open scenario file {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("failed to parse scenario file {}", path.display()))?
        }
        None => ScenarioParams::default(),
    };

    let segments = match &args.forecast {
        Some(path) => {
            let forecast = load_forecast(path)
                .map_err(|e| anyhow::anyhow!("failed to load forecast {}: {e}", path.display()))?;
            params.build_segments_from(&forecast)?
        }
        None => params.build_segments()?,
    };
    log::info!("valuing {} segments", segments.len());

    // "Today" is chosen once, here, and threaded through explicitly
    let fallback_as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let timing = params.timing(fallback_as_of);
    println!(
        "Valuation as of {} (approval {})\n",
        timing.as_of_date, timing.approval_date
    );

    let portfolio = value_portfolio(&segments, &timing, params.blend_weight)?;
    print!("{}", valuation_table(&portfolio));

    // Undefined MOIC/IRR is rendered explicitly; only genuinely invalid
    // inputs (bad weight, bad rate) abort above
    let metrics = match compute_returns(portfolio.pre_money_value, &params.investment_terms()) {
        Ok(m) => Some(m),
        Err(
            err @ (ValuationError::DivisionByZero { .. }
            | ValuationError::UndefinedIrr { .. }
            | ValuationError::InvalidHoldingPeriod { .. }),
        ) => {
            log::warn!("return metrics unavailable: {err}");
            None
        }
        Err(err) => return Err(err.into()),
    };
    println!();
    print!(
        "{}",
        returns_summary(portfolio.pre_money_value, params.investment, metrics.as_ref())
    );

    if let Some(path) = &args.output {
        write_csv(path, &portfolio)?;
        println!("\nValuation table written to {}", path.display());
    }

    Ok(())
}

fn write_csv(path: &PathBuf, portfolio: &valuation_system::PortfolioValuation) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["Segment", "YearsToTerminal", "RevenueNPV", "EbitdaNPV", "BlendedValue"])?;
    for row in &portfolio.segments {
        writer.write_record([
            row.segment.clone(),
            format!("{:.4}", row.years_to_terminal),
            format!("{:.2}", row.revenue_npv),
            format!("{:.2}", row.ebitda_npv),
            format!("{:.2}", row.blended_value),
        ])?;
    }
    writer.write_record([
        "Total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", portfolio.pre_money_value),
    ])?;
    writer.flush()?;
    Ok(())
}
