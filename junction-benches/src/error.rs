//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use crate::source::SyntheticError;
use junction_core::{AnalysisError, JunctionError, PairError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic data generation failed.
    #[error("synthetic source generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Pair generation failed.
    #[error("pair generation failed: {0}")]
    Pairs(#[from] PairError),
    /// An analysis failed on the generated cloud.
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
    /// Configuring or running the orchestrator failed.
    #[error("circuit run failed: {0}")]
    Junction(#[from] JunctionError),
}
