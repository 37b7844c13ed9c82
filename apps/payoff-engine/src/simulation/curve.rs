//! Payoff curve produced by a range sweep.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate profit at one settlement price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffPoint {
    /// Settlement price.
    pub settlement_price: i64,
    /// Sum of every position's profit at that price.
    pub profit: Decimal,
}

impl From<(i64, Decimal)> for PayoffPoint {
    fn from((settlement_price, profit): (i64, Decimal)) -> Self {
        Self {
            settlement_price,
            profit,
        }
    }
}

/// Ordered payoff points, one per price in the simulated range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoffCurve {
    points: Vec<PayoffPoint>,
}

impl PayoffCurve {
    /// Wrap points already in range order.
    #[must_use]
    pub const fn new(points: Vec<PayoffPoint>) -> Self {
        Self { points }
    }

    /// Points in range order.
    #[must_use]
    pub fn points(&self) -> &[PayoffPoint] {
        &self.points
    }

    /// Profit values in range order.
    #[must_use]
    pub fn profits(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.profit).collect()
    }

    /// Consume the curve, returning its profit values.
    #[must_use]
    pub fn into_profits(self) -> Vec<Decimal> {
        self.points.into_iter().map(|p| p.profit).collect()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point with the highest profit (earliest on ties).
    #[must_use]
    pub fn max_profit(&self) -> Option<PayoffPoint> {
        self.points
            .iter()
            .copied()
            .reduce(|best, p| if p.profit > best.profit { p } else { best })
    }

    /// Point with the lowest profit (earliest on ties).
    #[must_use]
    pub fn max_loss(&self) -> Option<PayoffPoint> {
        self.points
            .iter()
            .copied()
            .reduce(|worst, p| if p.profit < worst.profit { p } else { worst })
    }
}
