//! Commission Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PositionSide;
use crate::error::PayoffError;

/// Proportional trading fees for entering a long or a short position.
///
/// Rates are fractions (0.001 = 0.1%). Long legs pay `long` on top of the
/// amount spent; short legs receive the amount reduced by `short`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CommissionRates")]
pub struct Commission {
    long: Decimal,
    short: Decimal,
}

#[derive(Deserialize)]
struct CommissionRates {
    #[serde(default)]
    long: Decimal,
    #[serde(default)]
    short: Decimal,
}

impl TryFrom<CommissionRates> for Commission {
    type Error = PayoffError;

    fn try_from(rates: CommissionRates) -> Result<Self, Self::Error> {
        Self::new(rates.long, rates.short)
    }
}

impl Commission {
    /// No fees on either side.
    pub const ZERO: Self = Self {
        long: Decimal::ZERO,
        short: Decimal::ZERO,
    };

    /// Create a commission schedule.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either rate is negative.
    pub fn new(long: Decimal, short: Decimal) -> Result<Self, PayoffError> {
        if long < Decimal::ZERO {
            return Err(PayoffError::validation(
                "commission.long",
                format!("rate must be non-negative, got {long}"),
            ));
        }
        if short < Decimal::ZERO {
            return Err(PayoffError::validation(
                "commission.short",
                format!("rate must be non-negative, got {short}"),
            ));
        }
        Ok(Self { long, short })
    }

    /// Same rate on both sides.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the rate is negative.
    pub fn symmetric(rate: Decimal) -> Result<Self, PayoffError> {
        Self::new(rate, rate)
    }

    /// Rate charged when entering a long position.
    #[must_use]
    pub const fn long(&self) -> Decimal {
        self.long
    }

    /// Rate charged when entering a short position.
    #[must_use]
    pub const fn short(&self) -> Decimal {
        self.short
    }

    /// Returns true if both rates are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.long.is_zero() && self.short.is_zero()
    }

    /// Apply the fee for `side` to an entry amount (premium or asset price).
    ///
    /// Long: `amount * (1 + long)`. Short: `amount * (1 - short)`.
    /// The long rate is never applied to a short leg.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn net_of_fees(&self, side: PositionSide, amount: Decimal) -> Option<Decimal> {
        let factor = match side {
            PositionSide::Long => Decimal::ONE.checked_add(self.long)?,
            PositionSide::Short => Decimal::ONE.checked_sub(self.short)?,
        };
        amount.checked_mul(factor)
    }
}

impl Default for Commission {
    fn default() -> Self {
        Self::ZERO
    }
}
