//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept in every payoff result.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Round to cents, half away from zero (2.345 -> 2.35, -2.345 -> -2.35).
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(round_currency(dec!(2.345)), dec!(2.35));
        assert_eq!(round_currency(dec!(-2.345)), dec!(-2.35));
        // Half-to-even would give 0.12 here
        assert_eq!(round_currency(dec!(0.125)), dec!(0.13));
    }

    #[test]
    fn non_midpoint_rounds_to_nearest() {
        assert_eq!(round_currency(dec!(150.1545)), dec!(150.15));
        assert_eq!(round_currency(dec!(-103.712)), dec!(-103.71));
        assert_eq!(round_currency(dec!(49.8455)), dec!(49.85));
    }

    #[test]
    fn short_values_unchanged() {
        assert_eq!(round_currency(dec!(91.2)), dec!(91.2));
        assert_eq!(round_currency(dec!(-50)), dec!(-50));
    }
}
