//! Position quantity.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayoffError;

/// Number of contracts or units held.
///
/// Always positive: direction is carried by [`PositionSide`](super::PositionSide),
/// never by the sign of the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    /// A single contract or unit.
    pub const ONE: Self = Self(1);

    /// Create a quantity.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `amount` is zero or negative.
    pub fn new(amount: i64) -> Result<Self, PayoffError> {
        if amount <= 0 {
            return Err(PayoffError::validation(
                "quantity",
                format!("must be positive, got {amount}"),
            ));
        }
        Ok(Self(amount))
    }

    /// Get the raw count.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// The count as a Decimal multiplier.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = PayoffError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}
