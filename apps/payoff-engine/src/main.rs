//! Payoff Engine Binary
//!
//! Evaluates a scenario file and prints a JSON payoff report to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin payoff-engine -- scenario.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `PAYOFF_SCENARIO`: Scenario path when no argument is given (default: scenario.yaml)
//! - `RUST_LOG`: Log level, overrides the scenario's logging level

use anyhow::{Context, Result};
use payoff_engine::config::{self, DEFAULT_SCENARIO_PATH, ScenarioConfig};
use payoff_engine::telemetry::init_tracing;
use payoff_engine::{AssetParam, OptionParam, Payoff, PayoffCurve, PayoffPoint};
use rust_decimal::Decimal;
use serde::Serialize;

/// Profit of one configured position at its own settlement price.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum PositionReport {
    Option {
        #[serde(flatten)]
        param: OptionParam,
        profit: Decimal,
        break_even_estimate: Decimal,
    },
    Asset {
        #[serde(flatten)]
        param: AssetParam,
        profit: Decimal,
    },
}

#[derive(Debug, Serialize)]
struct CurveSummary {
    points: usize,
    max_profit: Option<PayoffPoint>,
    max_loss: Option<PayoffPoint>,
}

#[derive(Debug, Serialize)]
struct Report {
    positions: Vec<PositionReport>,
    curve: PayoffCurve,
    summary: CurveSummary,
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PAYOFF_SCENARIO").ok())
        .unwrap_or_else(|| DEFAULT_SCENARIO_PATH.to_string());

    let scenario = config::load_config(Some(&path))
        .with_context(|| format!("loading scenario '{path}'"))?;
    init_tracing(&scenario.observability.logging);

    tracing::info!(
        scenario = %path,
        options = scenario.positions.options.len(),
        assets = scenario.positions.assets.len(),
        "Evaluating scenario"
    );

    let report = build_report(scenario)?;
    let json = serde_json::to_string_pretty(&report).context("serializing report")?;
    println!("{json}");
    Ok(())
}

fn build_report(scenario: ScenarioConfig) -> Result<Report> {
    let mut positions = Vec::with_capacity(scenario.positions.len());
    for param in &scenario.positions.options {
        positions.push(PositionReport::Option {
            param: *param,
            profit: param.profit().context("evaluating option position")?,
            break_even_estimate: param
                .break_even_estimate()
                .context("estimating option break-even")?,
        });
    }
    for param in &scenario.positions.assets {
        positions.push(PositionReport::Asset {
            param: *param,
            profit: param.profit().context("evaluating asset position")?,
        });
    }

    let curve = scenario
        .into_builder()
        .simulate_curve()
        .context("simulating settlement range")?;
    let summary = CurveSummary {
        points: curve.len(),
        max_profit: curve.max_profit(),
        max_loss: curve.max_loss(),
    };

    Ok(Report {
        positions,
        curve,
        summary,
    })
}
