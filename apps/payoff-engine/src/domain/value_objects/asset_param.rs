//! Underlying Asset Position Value Object

use serde::{Deserialize, Serialize};

use super::{Commission, PositionSide, Quantity};
use crate::error::PayoffError;

/// One position in the underlying asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AssetParamFields")]
pub struct AssetParam {
    /// Long (bought) or short (sold).
    position: PositionSide,
    /// Entry price.
    price: i64,
    /// Asset price at evaluation time.
    settlement_price: i64,
    /// Number of units.
    quantity: Quantity,
    /// Entry fees.
    commission: Commission,
}

#[derive(Deserialize)]
struct AssetParamFields {
    position: PositionSide,
    price: i64,
    settlement_price: i64,
    #[serde(default)]
    quantity: Quantity,
    #[serde(default)]
    commission: Commission,
}

impl TryFrom<AssetParamFields> for AssetParam {
    type Error = PayoffError;

    fn try_from(fields: AssetParamFields) -> Result<Self, Self::Error> {
        Ok(Self::new(fields.position, fields.price, fields.settlement_price)?
            .with_quantity(fields.quantity)
            .with_commission(fields.commission))
    }
}

impl AssetParam {
    /// Create a single-unit asset position with no commission.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `price` is negative.
    pub fn new(position: PositionSide, price: i64, settlement_price: i64) -> Result<Self, PayoffError> {
        if price < 0 {
            return Err(PayoffError::validation(
                "price",
                format!("must be non-negative, got {price}"),
            ));
        }
        Ok(Self {
            position,
            price,
            settlement_price,
            quantity: Quantity::ONE,
            commission: Commission::ZERO,
        })
    }

    /// Set the number of units.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the commission schedule.
    #[must_use]
    pub const fn with_commission(mut self, commission: Commission) -> Self {
        self.commission = commission;
        self
    }

    /// Copy of this position evaluated at another settlement price.
    #[must_use]
    pub const fn with_settlement_price(&self, settlement_price: i64) -> Self {
        Self {
            settlement_price,
            ..*self
        }
    }

    /// Copy of this position taken by the counterparty.
    #[must_use]
    pub const fn with_position(&self, position: PositionSide) -> Self {
        Self { position, ..*self }
    }

    /// Get the position side.
    #[must_use]
    pub const fn position(&self) -> PositionSide {
        self.position
    }

    /// Get the entry price.
    #[must_use]
    pub const fn price(&self) -> i64 {
        self.price
    }

    /// Get the settlement price.
    #[must_use]
    pub const fn settlement_price(&self) -> i64 {
        self.settlement_price
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Get the commission schedule.
    #[must_use]
    pub const fn commission(&self) -> Commission {
        self.commission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_param_new() {
        let param = AssetParam::new(PositionSide::Long, 1_000, 900).unwrap();
        assert_eq!(param.price(), 1_000);
        assert_eq!(param.settlement_price(), 900);
        assert_eq!(param.quantity(), Quantity::ONE);
    }

    #[test]
    fn asset_param_rejects_negative_price() {
        assert!(AssetParam::new(PositionSide::Short, -10, 900).unwrap_err().is_validation());
    }

    #[test]
    fn with_settlement_price_is_a_copy() {
        let original = AssetParam::new(PositionSide::Short, 1_000, 900).unwrap();
        let moved = original.with_settlement_price(1_100);
        assert_eq!(original.settlement_price(), 900);
        assert_eq!(moved.settlement_price(), 1_100);
        assert_eq!(moved.price(), 1_000);
    }

    #[test]
    fn asset_param_deserialize() {
        let param: AssetParam = serde_json::from_str(
            r#"{"position": "short", "price": 1000, "settlement_price": 900, "quantity": 4}"#,
        )
        .unwrap();
        assert!(param.position().is_short());
        assert_eq!(param.quantity().get(), 4);

        assert!(
            serde_json::from_str::<AssetParam>(
                r#"{"position": "long", "price": -1, "settlement_price": 900}"#
            )
            .is_err()
        );
    }
}
