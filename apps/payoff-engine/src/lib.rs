// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]

//! Payoff Engine - Rust Core Library
//!
//! Profit/loss of option and underlying-asset positions at a settlement
//! price, and aggregate payoff curves across a range of settlement prices.
//!
//! # Layout
//!
//! - **Domain**: validated position value objects (`OptionParam`,
//!   `AssetParam`, `Commission`, `Quantity`)
//! - **Payoff**: closed-form profit per position, rounded to cents
//! - **Simulation**: `PositionBuilder` sweeps a `SimulateRange` and sums the
//!   payoff of every position at each price
//! - **Config / Telemetry**: YAML scenario loading and tracing setup used by
//!   the `payoff-engine` binary
//!
//! All money values are `rust_decimal::Decimal`; results are rounded to two
//! decimal places, half away from zero.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Position value objects.
pub mod domain;

/// Error types.
pub mod error;

/// Single-position payoff formulas.
pub mod payoff;

/// Range sweep over many positions.
pub mod simulation;

/// Scenario file loading.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

pub use domain::{AssetParam, Commission, OptionParam, OptionRight, PositionSide, Quantity};
pub use error::PayoffError;
pub use payoff::{OptionFormula, Payoff, profit, round_currency};
pub use simulation::{PayoffCurve, PayoffPoint, PositionBuilder, SimulateRange, SimulationConfig};
