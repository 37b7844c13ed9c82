//! Payoff engine.
//!
//! Closed-form profit of a single option or asset position at its settlement
//! price. Every result is rounded to currency precision with
//! [`round_currency`] so that aggregates are sums of cent values.
//!
//! # Example
//!
//! ```
//! use payoff_engine::{OptionParam, OptionRight, Payoff, PositionSide};
//! use rust_decimal_macros::dec;
//!
//! let call = OptionParam::new(PositionSide::Long, OptionRight::Call, 1_100, 1_000, 50)?;
//! assert_eq!(call.profit()?, dec!(50));
//! assert_eq!(call.profit_at(900)?, dec!(-50));
//! # Ok::<(), payoff_engine::PayoffError>(())
//! ```

mod asset;
mod formula;
mod option;
mod rounding;

use rust_decimal::Decimal;

use crate::error::PayoffError;

pub use formula::OptionFormula;
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};

/// A position whose profit is a pure function of its settlement price.
pub trait Payoff: Sized {
    /// Profit at the position's own settlement price, rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::Arithmetic`] if an intermediate value overflows.
    fn profit(&self) -> Result<Decimal, PayoffError>;

    /// The settlement price the position is evaluated at.
    fn settlement_price(&self) -> i64;

    /// Copy of the position with another settlement price.
    #[must_use]
    fn with_settlement_price(&self, settlement_price: i64) -> Self;

    /// Profit of a copy of this position settled at `settlement_price`.
    ///
    /// # Errors
    ///
    /// Same as [`Payoff::profit`].
    fn profit_at(&self, settlement_price: i64) -> Result<Decimal, PayoffError> {
        self.with_settlement_price(settlement_price).profit()
    }
}

/// One-shot profit evaluation.
///
/// # Errors
///
/// Same as [`Payoff::profit`].
pub fn profit<P: Payoff>(param: &P) -> Result<Decimal, PayoffError> {
    param.profit()
}
