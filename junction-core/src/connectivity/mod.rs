//! Full-connectivity monitoring.
//!
//! Feeds pairs in ascending order into a fresh forest until every point sits
//! in one circuit. The pair whose merge takes the live count from two to one
//! is the last connecting pair, the same edge Kruskal's algorithm would add
//! last when building a minimum spanning tree over the complete graph.

use tracing::{debug, instrument, warn};

use crate::{
    error::AnalysisError,
    forest::DisjointSetForest,
    pairs::{Pair, SortedPairs},
};

/// The pair that joined the final two circuits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LastConnection {
    pair: Pair,
    edges_examined: usize,
}

impl LastConnection {
    /// Returns the connecting pair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn pair(&self) -> Pair { self.pair }

    /// Returns the smaller endpoint index.
    #[must_use]
    pub const fn left(&self) -> usize {
        self.pair.left()
    }

    /// Returns the larger endpoint index.
    #[must_use]
    pub const fn right(&self) -> usize {
        self.pair.right()
    }

    /// Returns how many pairs were fed to the forest, including this one.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges_examined(&self) -> usize { self.edges_examined }
}

/// Progress of a [`ConnectivityMonitor`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MonitorState {
    /// More than one circuit remains.
    Scanning {
        /// Live circuits.
        components: usize,
    },
    /// Terminal success: every point is connected.
    Connected(LastConnection),
    /// Terminal failure: the pairs ran out first.
    Exhausted {
        /// Circuits still live.
        components: usize,
        /// Pairs examined before running out.
        edges: usize,
    },
}

impl MonitorState {
    /// Returns `true` for `Connected` and `Exhausted`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Scanning { .. })
    }
}

/// State machine watching a forest for the transition to one circuit.
///
/// # Examples
/// ```
/// use junction_core::{ConnectivityMonitor, MonitorState, Pair};
///
/// let mut monitor = ConnectivityMonitor::new(3)?;
/// monitor.observe(&Pair::new(0, 2, 25))?;
/// assert_eq!(monitor.state(), MonitorState::Scanning { components: 2 });
///
/// monitor.observe(&Pair::new(0, 1, 100))?;
/// match monitor.state() {
///     MonitorState::Connected(last) => assert_eq!((last.left(), last.right()), (0, 1)),
///     other => panic!("expected connection, got {other:?}"),
/// }
/// # Ok::<(), junction_core::AnalysisError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConnectivityMonitor {
    forest: DisjointSetForest,
    state: MonitorState,
    examined: usize,
}

impl ConnectivityMonitor {
    /// Starts monitoring `node_count` singleton circuits.
    ///
    /// # Errors
    /// Returns [`AnalysisError::NotEnoughPoints`] for fewer than two points,
    /// since no pair can then reduce the count from two to one.
    pub fn new(node_count: usize) -> Result<Self, AnalysisError> {
        if node_count < 2 {
            return Err(AnalysisError::NotEnoughPoints { points: node_count });
        }
        Ok(Self {
            forest: DisjointSetForest::new(node_count),
            state: MonitorState::Scanning {
                components: node_count,
            },
            examined: 0,
        })
    }

    /// Returns the current state.
    #[must_use]
    #[rustfmt::skip]
    pub fn state(&self) -> MonitorState { self.state }

    /// Feeds one pair to the forest.
    ///
    /// Once the monitor is terminal further pairs are ignored.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Forest`] when the pair references a point
    /// outside the forest.
    pub fn observe(&mut self, pair: &Pair) -> Result<MonitorState, AnalysisError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let merge = self.forest.union(pair.left(), pair.right())?;
        self.examined += 1;
        let components = self.forest.component_count();
        self.state = if merge.is_merged() && components == 1 {
            MonitorState::Connected(LastConnection {
                pair: *pair,
                edges_examined: self.examined,
            })
        } else {
            MonitorState::Scanning { components }
        };
        Ok(self.state)
    }

    /// Declares the pair stream finished.
    ///
    /// A monitor still scanning moves to `Exhausted`.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Exhausted`] unless the monitor reached
    /// `Connected`.
    pub fn finish(&mut self) -> Result<LastConnection, AnalysisError> {
        match self.state {
            MonitorState::Connected(last) => Ok(last),
            MonitorState::Scanning { components } | MonitorState::Exhausted { components, .. } => {
                self.state = MonitorState::Exhausted {
                    components,
                    edges: self.examined,
                };
                Err(AnalysisError::Exhausted {
                    components,
                    edges: self.examined,
                })
            }
        }
    }
}

/// Finds the pair that joins the final two circuits.
///
/// Pairs are consumed in ascending order and consumption stops at the first
/// pair that leaves a single circuit; later pairs are never examined.
///
/// # Errors
/// Returns [`AnalysisError::NotEnoughPoints`] for fewer than two points and
/// [`AnalysisError::Exhausted`] when the pairs run out with more than one
/// circuit left (only possible for pair lists that are not complete).
///
/// # Examples
/// ```
/// use junction_core::{Point, PointSet, SortedPairs, find_last_connection};
///
/// let points = PointSet::new(vec![
///     Point::new(0, 0, 0),
///     Point::new(10, 0, 0),
///     Point::new(0, 5, 0),
/// ]);
/// let pairs = SortedPairs::from_points(&points)?;
/// let last = find_last_connection(&pairs)?;
/// assert_eq!((last.left(), last.right()), (0, 1));
/// assert_eq!(last.edges_examined(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "connectivity.monitor",
    skip(pairs),
    fields(points = pairs.node_count(), pair_count = pairs.len()),
)]
pub fn find_last_connection(pairs: &SortedPairs) -> Result<LastConnection, AnalysisError> {
    let mut monitor = ConnectivityMonitor::new(pairs.node_count())?;
    for pair in pairs {
        if let MonitorState::Connected(last) = monitor.observe(pair)? {
            debug!(
                left = last.left(),
                right = last.right(),
                distance_sq = last.pair().distance_sq(),
                examined = last.edges_examined(),
                "all circuits connected"
            );
            return Ok(last);
        }
    }

    let outcome = monitor.finish();
    if let Err(AnalysisError::Exhausted { components, edges }) = &outcome {
        warn!(components, edges, "pair list exhausted before full connectivity");
    }
    outcome
}

#[cfg(test)]
mod tests;
