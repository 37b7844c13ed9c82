//! Range simulator.
//!
//! Re-evaluates every position at each settlement price of a
//! [`SimulateRange`] and sums the results into a [`PayoffCurve`].
//!
//! # Example
//!
//! ```
//! use payoff_engine::{OptionParam, OptionRight, PositionBuilder, PositionSide, SimulateRange};
//! use rust_decimal_macros::dec;
//!
//! let call = OptionParam::new(PositionSide::Long, OptionRight::Call, 0, 1_000, 50)?;
//! let builder = PositionBuilder::new(vec![call], vec![], SimulateRange::new(900, 1_100, 50)?);
//!
//! assert_eq!(builder.simulate()?, vec![dec!(-50), dec!(-50), dec!(-50), dec!(0)]);
//! # Ok::<(), payoff_engine::PayoffError>(())
//! ```

mod builder;
mod config;
mod curve;
mod range;

pub use builder::PositionBuilder;
pub use config::SimulationConfig;
pub use curve::{PayoffCurve, PayoffPoint};
pub use range::SimulateRange;
