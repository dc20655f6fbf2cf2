//! Benchmark parameter types.

use std::fmt;

/// Parameters for a circuit benchmark run.
#[derive(Clone, Debug)]
pub struct CircuitBenchParams {
    /// Number of junction boxes in the cloud.
    pub point_count: usize,
    /// Pairs applied by the bounded cluster pass.
    pub connection_budget: usize,
}

impl fmt::Display for CircuitBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.point_count, self.connection_budget)
    }
}
