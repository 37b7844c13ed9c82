//! Option Position Value Object

use serde::{Deserialize, Serialize};

use super::{Commission, OptionRight, PositionSide, Quantity};
use crate::error::PayoffError;

/// One option position evaluated at a settlement price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OptionParamFields")]
pub struct OptionParam {
    /// Long (bought) or short (written).
    position: PositionSide,
    /// Call or put.
    instrument_type: OptionRight,
    /// Underlying price at evaluation time.
    settlement_price: i64,
    /// Exercise price.
    strike: i64,
    /// Price paid or received per contract.
    premium: i64,
    /// Number of contracts.
    quantity: Quantity,
    /// Entry fees.
    commission: Commission,
}

#[derive(Deserialize)]
struct OptionParamFields {
    position: PositionSide,
    instrument_type: OptionRight,
    settlement_price: i64,
    strike: i64,
    premium: i64,
    #[serde(default)]
    quantity: Quantity,
    #[serde(default)]
    commission: Commission,
}

impl TryFrom<OptionParamFields> for OptionParam {
    type Error = PayoffError;

    fn try_from(fields: OptionParamFields) -> Result<Self, Self::Error> {
        Ok(Self::new(
            fields.position,
            fields.instrument_type,
            fields.settlement_price,
            fields.strike,
            fields.premium,
        )?
        .with_quantity(fields.quantity)
        .with_commission(fields.commission))
    }
}

impl OptionParam {
    /// Create a single-contract option position with no commission.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `strike` or `premium` is negative.
    pub fn new(
        position: PositionSide,
        instrument_type: OptionRight,
        settlement_price: i64,
        strike: i64,
        premium: i64,
    ) -> Result<Self, PayoffError> {
        if strike < 0 {
            return Err(PayoffError::validation(
                "strike",
                format!("must be non-negative, got {strike}"),
            ));
        }
        if premium < 0 {
            return Err(PayoffError::validation(
                "premium",
                format!("must be non-negative, got {premium}"),
            ));
        }
        Ok(Self {
            position,
            instrument_type,
            settlement_price,
            strike,
            premium,
            quantity: Quantity::ONE,
            commission: Commission::ZERO,
        })
    }

    /// Set the number of contracts.
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

    /// Get the option right.
    #[must_use]
    pub const fn instrument_type(&self) -> OptionRight {
        self.instrument_type
    }

    /// Get the settlement price.
    #[must_use]
    pub const fn settlement_price(&self) -> i64 {
        self.settlement_price
    }

    /// Get the strike.
    #[must_use]
    pub const fn strike(&self) -> i64 {
        self.strike
    }

    /// Get the premium.
    #[must_use]
    pub const fn premium(&self) -> i64 {
        self.premium
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
    use rust_decimal_macros::dec;

    fn test_call() -> OptionParam {
        OptionParam::new(PositionSide::Long, OptionRight::Call, 1_000, 1_200, 150).unwrap()
    }

    #[test]
    fn option_param_defaults() {
        let param = test_call();
        assert_eq!(param.quantity(), Quantity::ONE);
        assert_eq!(param.commission(), Commission::ZERO);
        assert_eq!(param.strike(), 1_200);
        assert_eq!(param.premium(), 150);
    }

    #[test]
    fn option_param_rejects_negative_fields() {
        let err = OptionParam::new(PositionSide::Long, OptionRight::Put, 100, -1, 5).unwrap_err();
        assert_eq!(err, PayoffError::validation("strike", "must be non-negative, got -1"));
        assert!(OptionParam::new(PositionSide::Short, OptionRight::Put, 100, 90, -5).is_err());
    }

    #[test]
    fn with_settlement_price_leaves_original_untouched() {
        let original = test_call();
        let moved = original.with_settlement_price(1_500);

        assert_eq!(original.settlement_price(), 1_000);
        assert_eq!(moved.settlement_price(), 1_500);
        assert_eq!(moved.strike(), original.strike());
        assert_eq!(moved.position(), original.position());
    }

    #[test]
    fn with_position_flips_side_only() {
        let short = test_call().with_position(PositionSide::Short);
        assert!(short.position().is_short());
        assert_eq!(short.instrument_type(), OptionRight::Call);
    }

    #[test]
    fn option_param_deserialize_with_defaults() {
        let json = r#"{
            "position": "long",
            "instrument_type": "put",
            "settlement_price": 1000,
            "strike": 1200,
            "premium": 150
        }"#;
        let param: OptionParam = serde_json::from_str(json).unwrap();
        assert_eq!(param.instrument_type(), OptionRight::Put);
        assert_eq!(param.quantity(), Quantity::ONE);
        assert!(param.commission().is_zero());
    }

    #[test]
    fn option_param_deserialize_validates() {
        let json = r#"{
            "position": "long",
            "instrument_type": "call",
            "settlement_price": 1000,
            "strike": 1200,
            "premium": 150,
            "quantity": 0
        }"#;
        assert!(serde_json::from_str::<OptionParam>(json).is_err());

        let json = r#"{
            "position": "sideways",
            "instrument_type": "call",
            "settlement_price": 1000,
            "strike": 1200,
            "premium": 150
        }"#;
        assert!(serde_json::from_str::<OptionParam>(json).is_err());
    }

    #[test]
    fn option_param_serde_round_trip() {
        let param = test_call()
            .with_quantity(Quantity::new(3).unwrap())
            .with_commission(Commission::symmetric(dec!(0.00103)).unwrap());
        let json = serde_json::to_string(&param).unwrap();
        let parsed: OptionParam = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, param);
    }
}
