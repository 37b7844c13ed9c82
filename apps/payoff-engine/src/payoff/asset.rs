//! Underlying asset payoff.

use rust_decimal::Decimal;

use super::{Payoff, round_currency};
use crate::domain::{AssetParam, PositionSide};
use crate::error::PayoffError;

impl AssetParam {
    /// Entry price after commission for this position's side.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::Arithmetic`] on overflow.
    pub fn net_entry_price(&self) -> Result<Decimal, PayoffError> {
        self.commission()
            .net_of_fees(self.position(), Decimal::from(self.price()))
            .ok_or_else(|| PayoffError::overflow("net entry price"))
    }
}

impl Payoff for AssetParam {
    fn profit(&self) -> Result<Decimal, PayoffError> {
        let entry = self.net_entry_price()?;
        let settlement = Decimal::from(self.settlement_price());

        let per_unit = match self.position() {
            PositionSide::Long => settlement.checked_sub(entry),
            PositionSide::Short => entry.checked_sub(settlement),
        };

        per_unit
            .and_then(|p| p.checked_mul(self.quantity().as_decimal()))
            .map(round_currency)
            .ok_or_else(|| PayoffError::overflow("asset payoff"))
    }

    fn settlement_price(&self) -> i64 {
        Self::settlement_price(self)
    }

    fn with_settlement_price(&self, settlement_price: i64) -> Self {
        Self::with_settlement_price(self, settlement_price)
    }
}
