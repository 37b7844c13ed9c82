//! Position builder: sweeps a settlement price range over a set of positions.

use std::time::Instant;

use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::{debug, debug_span, info};

use super::config::SimulationConfig;
use super::curve::{PayoffCurve, PayoffPoint};
use super::range::SimulateRange;
use crate::domain::{AssetParam, OptionParam};
use crate::error::PayoffError;
use crate::payoff::Payoff;

/// Option and asset positions simulated together over one price range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionBuilder {
    options: Vec<OptionParam>,
    assets: Vec<AssetParam>,
    range: SimulateRange,
    config: SimulationConfig,
}

impl PositionBuilder {
    /// Create a builder with the default execution config.
    #[must_use]
    pub fn new(options: Vec<OptionParam>, assets: Vec<AssetParam>, range: SimulateRange) -> Self {
        Self {
            options,
            assets,
            range,
            config: SimulationConfig::default(),
        }
    }

    /// Set the execution config.
    #[must_use]
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Option positions.
    #[must_use]
    pub fn options(&self) -> &[OptionParam] {
        &self.options
    }

    /// Asset positions.
    #[must_use]
    pub fn assets(&self) -> &[AssetParam] {
        &self.assets
    }

    /// The simulated range.
    #[must_use]
    pub const fn range(&self) -> &SimulateRange {
        &self.range
    }

    /// The execution config.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Total number of positions.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.options.len() + self.assets.len()
    }

    /// Aggregate profit of every position settled at `settlement_price`.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::Arithmetic`] if a payoff or the sum overflows.
    pub fn profit_at(&self, settlement_price: i64) -> Result<Decimal, PayoffError> {
        let options = sum_at(&self.options, settlement_price)?;
        let assets = sum_at(&self.assets, settlement_price)?;
        options
            .checked_add(assets)
            .ok_or_else(|| PayoffError::overflow("aggregate payoff"))
    }

    /// Aggregate profit at each price of the range, in range order.
    ///
    /// # Errors
    ///
    /// See [`Self::simulate_curve`].
    pub fn simulate(&self) -> Result<Vec<Decimal>, PayoffError> {
        Ok(self.simulate_curve()?.into_profits())
    }

    /// Aggregate payoff curve over the range.
    ///
    /// Runs on rayon when the range has at least
    /// [`SimulationConfig::min_parallel_points`] prices; the output order is the
    /// range order either way.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::Arithmetic`] on overflow at any price, or
    /// [`PayoffError::Executor`] if a dedicated thread pool cannot be built.
    /// No partial curve is returned.
    pub fn simulate_curve(&self) -> Result<PayoffCurve, PayoffError> {
        let points = self.range.len();
        let parallel = self.config.is_parallel(points);
        let _span = debug_span!(
            "simulate",
            min = self.range.min(),
            max = self.range.max(),
            step = self.range.step()
        )
        .entered();

        info!(
            options = self.options.len(),
            assets = self.assets.len(),
            points,
            parallel,
            "Starting payoff simulation"
        );
        let start = Instant::now();

        let prices: Vec<i64> = self.range.prices().collect();
        let profits = if parallel {
            self.run_parallel(&prices)?
        } else {
            self.run_sequential(&prices)?
        };

        let elapsed = start.elapsed();
        info!(
            points,
            elapsed_ms = elapsed.as_millis() as u64,
            "Payoff simulation complete"
        );

        Ok(PayoffCurve::new(
            prices.into_iter().zip(profits).map(PayoffPoint::from).collect(),
        ))
    }

    fn run_sequential(&self, prices: &[i64]) -> Result<Vec<Decimal>, PayoffError> {
        prices.iter().map(|&price| self.profit_at(price)).collect()
    }

    fn run_parallel(&self, prices: &[i64]) -> Result<Vec<Decimal>, PayoffError> {
        let sweep = || {
            prices
                .par_iter()
                .map(|&price| self.profit_at(price))
                .collect::<Result<Vec<_>, _>>()
        };

        if self.config.max_threads == 0 {
            debug!(threads = rayon::current_num_threads(), "Using global thread pool");
            return sweep();
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.max_threads)
            .build()
            .map_err(|e| PayoffError::Executor {
                message: e.to_string(),
            })?;
        debug!(threads = self.config.max_threads, "Using dedicated thread pool");
        pool.install(sweep)
    }
}

fn sum_at<P: Payoff>(positions: &[P], settlement_price: i64) -> Result<Decimal, PayoffError> {
    positions.iter().try_fold(Decimal::ZERO, |total, position| {
        total
            .checked_add(position.profit_at(settlement_price)?)
            .ok_or_else(|| PayoffError::overflow("aggregate payoff"))
    })
}
