//! Builder utilities for configuring [`Circuits`] runs.
//!
//! Exposes the execution strategy selection surface and the validation
//! applied before a [`Circuits`] instance is constructed.

use std::num::NonZeroUsize;

use crate::{Result, circuits::Circuits, error::JunctionError};

/// Number of smallest pairs applied by the bounded cluster pass by default.
pub const DEFAULT_CONNECTION_BUDGET: usize = 1000;

/// Number of largest circuits multiplied together by default.
pub const DEFAULT_TOP_CIRCUITS: usize = 3;

/// How pair generation and the global sort are executed.
///
/// Both strategies produce the same sorted pair list because the pair order
/// is total; only wall-clock time differs.
///
/// # Examples
/// ```
/// use junction_core::ExecutionStrategy;
///
/// assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionStrategy {
    /// Run everything on the calling thread.
    #[default]
    Sequential,
    /// Generate and sort pairs on the rayon thread pool. Requires the
    /// `parallel` feature.
    Parallel,
}

impl ExecutionStrategy {
    /// Returns whether this build can execute the strategy.
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            Self::Sequential => true,
            Self::Parallel => cfg!(feature = "parallel"),
        }
    }
}

/// Configures and constructs [`Circuits`] instances.
///
/// # Examples
/// ```
/// use junction_core::{CircuitsBuilder, ExecutionStrategy};
///
/// let circuits = CircuitsBuilder::new()
///     .with_connection_budget(10)
///     .with_top_circuits(2)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(circuits.connection_budget(), 10);
/// assert_eq!(circuits.top_circuits().get(), 2);
/// assert_eq!(circuits.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone)]
pub struct CircuitsBuilder {
    connection_budget: usize,
    top_circuits: usize,
    execution_strategy: ExecutionStrategy,
}

impl Default for CircuitsBuilder {
    fn default() -> Self {
        Self {
            connection_budget: DEFAULT_CONNECTION_BUDGET,
            top_circuits: DEFAULT_TOP_CIRCUITS,
            execution_strategy: ExecutionStrategy::Sequential,
        }
    }
}

impl CircuitsBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use junction_core::CircuitsBuilder;
    ///
    /// let builder = CircuitsBuilder::new();
    /// assert_eq!(builder.connection_budget(), 1000);
    /// assert_eq!(builder.top_circuits(), 3);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how many of the smallest pairs the cluster pass applies.
    ///
    /// Zero is accepted and leaves every point in its own circuit.
    #[must_use]
    pub fn with_connection_budget(mut self, budget: usize) -> Self {
        self.connection_budget = budget;
        self
    }

    /// Returns the configured connection budget.
    #[must_use]
    pub fn connection_budget(&self) -> usize {
        self.connection_budget
    }

    /// Overrides how many of the largest circuits are multiplied together.
    #[must_use]
    pub fn with_top_circuits(mut self, count: usize) -> Self {
        self.top_circuits = count;
        self
    }

    /// Returns the configured number of ranked circuits.
    #[must_use]
    pub fn top_circuits(&self) -> usize {
        self.top_circuits
    }

    /// Sets the execution strategy for pair generation.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs a [`Circuits`] instance.
    ///
    /// # Errors
    /// Returns [`JunctionError::InvalidTopCircuits`] when `top_circuits` is
    /// zero and [`JunctionError::BackendUnavailable`] when the execution
    /// strategy is not compiled into this build.
    ///
    /// # Examples
    /// ```
    /// use junction_core::{CircuitsBuilder, JunctionError};
    ///
    /// let err = CircuitsBuilder::new().with_top_circuits(0).build().unwrap_err();
    /// assert!(matches!(err, JunctionError::InvalidTopCircuits { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Circuits> {
        let top_circuits =
            NonZeroUsize::new(self.top_circuits).ok_or(JunctionError::InvalidTopCircuits {
                got: self.top_circuits,
            })?;
        if !self.execution_strategy.is_available() {
            return Err(JunctionError::BackendUnavailable {
                requested: self.execution_strategy,
            });
        }
        Ok(Circuits::new(
            self.connection_budget,
            top_circuits,
            self.execution_strategy,
        ))
    }
}
