//! Configuration for range sweeps.

use serde::{Deserialize, Serialize};

/// How a settlement price sweep is executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maximum number of threads to use (0 = rayon's global pool).
    pub max_threads: usize,

    /// Minimum parallelization threshold (ranges with fewer points run sequentially).
    pub min_parallel_points: usize,
}

impl SimulationConfig {
    /// Always run on the calling thread.
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            max_threads: 0,
            min_parallel_points: usize::MAX,
        }
    }

    /// Whether a range of `points` prices should be swept in parallel.
    #[must_use]
    pub const fn is_parallel(&self, points: usize) -> bool {
        points >= self.min_parallel_points
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_threads: 0,
            min_parallel_points: 256,
        }
    }
}
