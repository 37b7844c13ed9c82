//! Option position payoff.

use rust_decimal::Decimal;

use super::{OptionFormula, Payoff, round_currency};
use crate::domain::OptionParam;
use crate::error::PayoffError;

impl OptionParam {
    /// Premium after commission for this position's side.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::Arithmetic`] on overflow.
    pub fn net_premium(&self) -> Result<Decimal, PayoffError> {
        self.commission()
            .net_of_fees(self.position(), Decimal::from(self.premium()))
            .ok_or_else(|| PayoffError::overflow("net premium"))
    }

    /// Formula selected by this position's side and right.
    #[must_use]
    pub const fn formula(&self) -> OptionFormula {
        OptionFormula::for_position(self.position(), self.instrument_type())
    }

    /// Rough break-even figure: `settlement_price - profit`.
    ///
    /// Best-effort estimate only. It is not a root of the payoff function and
    /// is not the price where profit is zero.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Payoff::profit`].
    pub fn break_even_estimate(&self) -> Result<Decimal, PayoffError> {
        Decimal::from(self.settlement_price())
            .checked_sub(self.profit()?)
            .ok_or_else(|| PayoffError::overflow("break-even estimate"))
    }
}

impl Payoff for OptionParam {
    fn profit(&self) -> Result<Decimal, PayoffError> {
        let net_premium = self.net_premium()?;
        let underlying_change = self
            .settlement_price()
            .checked_sub(self.strike())
            .map(Decimal::from)
            .ok_or_else(|| PayoffError::overflow("underlying change"))?;

        let per_contract = self
            .formula()
            .evaluate(underlying_change, net_premium)
            .ok_or_else(|| PayoffError::overflow("option payoff"))?;

        per_contract
            .checked_mul(self.quantity().as_decimal())
            .map(round_currency)
            .ok_or_else(|| PayoffError::overflow("option payoff"))
    }

    fn settlement_price(&self) -> i64 {
        Self::settlement_price(self)
    }

    fn with_settlement_price(&self, settlement_price: i64) -> Self {
        Self::with_settlement_price(self, settlement_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Commission, OptionRight, PositionSide, Quantity};
    use rust_decimal_macros::dec;

    fn position(side: PositionSide, right: OptionRight) -> OptionParam {
        OptionParam::new(side, right, 1_000, 1_200, 150)
            .unwrap()
            .with_commission(Commission::symmetric(dec!(0.00103)).unwrap())
    }

    #[test]
    fn out_of_the_money_long_call_loses_premium_plus_fee() {
        let p = position(PositionSide::Long, OptionRight::Call);
        assert_eq!(p.net_premium().unwrap(), dec!(150.1545));
        assert_eq!(p.profit().unwrap(), dec!(-150.15));
    }

    #[test]
    fn short_call_keeps_premium_net_of_fee() {
        let p = position(PositionSide::Short, OptionRight::Call);
        assert_eq!(p.net_premium().unwrap(), dec!(149.8455));
        assert_eq!(p.profit().unwrap(), dec!(149.85));
    }

    #[test]
    fn puts() {
        assert_eq!(
            position(PositionSide::Long, OptionRight::Put).profit().unwrap(),
            dec!(49.85)
        );
        assert_eq!(
            position(PositionSide::Short, OptionRight::Put).profit().unwrap(),
            dec!(-50.15)
        );
    }

    #[test]
    fn quantity_scales_before_rounding() {
        let p = position(PositionSide::Long, OptionRight::Call).with_quantity(Quantity::new(10).unwrap());
        // 10 x -150.1545 = -1501.545 -> -1501.55
        assert_eq!(p.profit().unwrap(), dec!(-1501.55));
    }

    #[test]
    fn profit_at_moves_settlement_only() {
        let p = OptionParam::new(PositionSide::Long, OptionRight::Call, 0, 1_000, 50).unwrap();
        assert_eq!(p.profit_at(1_100).unwrap(), dec!(50));
        assert_eq!(p.profit_at(900).unwrap(), dec!(-50));
        assert_eq!(p.settlement_price(), 0);
    }

    #[test]
    fn profit_is_idempotent() {
        let p = position(PositionSide::Short, OptionRight::Put);
        assert_eq!(p.profit().unwrap(), p.profit().unwrap());
    }

    #[test]
    fn break_even_estimate_is_settlement_minus_profit() {
        let p = position(PositionSide::Long, OptionRight::Call);
        // 1000 - (-150.15)
        assert_eq!(p.break_even_estimate().unwrap(), dec!(1150.15));
    }

    #[test]
    fn overflow_is_reported_not_panicked() {
        let p = OptionParam::new(PositionSide::Long, OptionRight::Call, i64::MIN, 1, 0).unwrap();
        assert_eq!(p.profit().unwrap_err(), PayoffError::overflow("underlying change"));
    }
}
