//! Option payoff formulas keyed by (position side, option right).

use rust_decimal::Decimal;

use crate::domain::{OptionRight, PositionSide};

/// The four expiry payoff formulas for a single option contract.
///
/// `underlying_change` is `settlement_price - strike`; `net_premium` is the
/// premium after commission. Results are per contract and unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionFormula {
    /// `max(change, 0) - net_premium`
    LongCall,
    /// `max(-change, 0) - net_premium`
    LongPut,
    /// `-max(change, 0) + net_premium`
    ShortCall,
    /// `-max(-change, 0) + net_premium`
    ShortPut,
}

impl OptionFormula {
    /// Select the formula for a position.
    #[must_use]
    pub const fn for_position(side: PositionSide, right: OptionRight) -> Self {
        match (side, right) {
            (PositionSide::Long, OptionRight::Call) => Self::LongCall,
            (PositionSide::Long, OptionRight::Put) => Self::LongPut,
            (PositionSide::Short, OptionRight::Call) => Self::ShortCall,
            (PositionSide::Short, OptionRight::Put) => Self::ShortPut,
        }
    }

    /// Intrinsic value at expiry for the option's right.
    #[must_use]
    pub fn intrinsic(self, underlying_change: Decimal) -> Decimal {
        match self {
            Self::LongCall | Self::ShortCall => underlying_change.max(Decimal::ZERO),
            Self::LongPut | Self::ShortPut => (-underlying_change).max(Decimal::ZERO),
        }
    }

    /// Per-contract profit. `None` on overflow.
    #[must_use]
    pub fn evaluate(self, underlying_change: Decimal, net_premium: Decimal) -> Option<Decimal> {
        let intrinsic = self.intrinsic(underlying_change);
        match self {
            Self::LongCall | Self::LongPut => intrinsic.checked_sub(net_premium),
            Self::ShortCall | Self::ShortPut => net_premium.checked_sub(intrinsic),
        }
    }
}
