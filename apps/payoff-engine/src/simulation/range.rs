//! Settlement price range.

use serde::{Deserialize, Serialize};

use crate::error::PayoffError;

/// Half-open arithmetic sequence `[min, max)` stepped by `step`.
///
/// A negative step walks downward from `min` towards `max`. A step whose
/// sign disagrees with `max - min` gives an empty range, matching the usual
/// half-open range convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct SimulateRange {
    min: i64,
    max: i64,
    step: i64,
}

#[derive(Deserialize)]
struct RangeBounds {
    min: i64,
    max: i64,
    step: i64,
}

impl TryFrom<RangeBounds> for SimulateRange {
    type Error = PayoffError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.min, bounds.max, bounds.step)
    }
}

impl SimulateRange {
    /// Upper bound on the number of price points in one range.
    pub const MAX_POINTS: usize = 10_000_000;

    /// Create a range.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `step` is zero or the range holds more
    /// than [`Self::MAX_POINTS`] prices.
    pub fn new(min: i64, max: i64, step: i64) -> Result<Self, PayoffError> {
        if step == 0 {
            return Err(PayoffError::validation("step", "must be non-zero"));
        }
        let range = Self { min, max, step };
        let points = range.point_count();
        if points > Self::MAX_POINTS as u128 {
            return Err(PayoffError::validation(
                "step",
                format!(
                    "range [{min}, {max}) by {step} has {points} points, limit is {}",
                    Self::MAX_POINTS
                ),
            ));
        }
        Ok(range)
    }

    /// First price (inclusive).
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// End price (exclusive).
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Distance between consecutive prices.
    #[must_use]
    pub const fn step(&self) -> i64 {
        self.step
    }

    // ceil(|max - min| / |step|) when the step points towards max, else 0
    const fn point_count(&self) -> u128 {
        let span = self.max as i128 - self.min as i128;
        let step = self.step as i128;
        if span == 0 || (span > 0) != (step > 0) {
            return 0;
        }
        let span = span.unsigned_abs();
        let step = step.unsigned_abs();
        span.div_ceil(step)
    }

    /// Number of prices in the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        // Bounded by MAX_POINTS at construction
        self.point_count() as usize
    }

    /// Returns true if the range has no prices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Prices in iteration order.
    pub fn prices(&self) -> impl ExactSizeIterator<Item = i64> + Clone {
        let Self { min, step, .. } = *self;
        // Every yielded price lies between min and max, so it fits in i64
        (0..self.len()).map(move |i| (i128::from(min) + i as i128 * i128::from(step)) as i64)
    }
}
