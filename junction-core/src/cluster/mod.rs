//! Bounded-edge cluster analysis.
//!
//! Applies a fixed budget of the smallest pairs to a fresh forest and ranks
//! the resulting circuits by size. Every pair in the budget is applied even
//! when its endpoints are already joined; such calls are no-ops.

use tracing::{debug, instrument};

use crate::{
    error::AnalysisError,
    forest::DisjointSetForest,
    pairs::SortedPairs,
};

/// Circuit sizes after the bounded pass.
///
/// # Examples
/// ```
/// use junction_core::{Point, PointSet, SortedPairs, analyze_clusters};
///
/// let points = PointSet::new(vec![
///     Point::new(0, 0, 0),
///     Point::new(10, 0, 0),
///     Point::new(0, 5, 0),
/// ]);
/// let pairs = SortedPairs::from_points(&points)?;
/// let report = analyze_clusters(&pairs, 1)?;
/// assert_eq!(report.sizes(), [2, 1]);
/// assert_eq!(report.checked_product_of_largest(2)?, Some(2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusterReport {
    sizes: Vec<usize>,
    edges_applied: usize,
    merges: usize,
}

impl ClusterReport {
    /// Returns every circuit size, largest first.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the number of circuits.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }

    /// Returns how many pairs were applied (the budget, clamped to the number
    /// of available pairs).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges_applied(&self) -> usize { self.edges_applied }

    /// Returns how many applied pairs actually joined two circuits.
    #[must_use]
    #[rustfmt::skip]
    pub fn merges(&self) -> usize { self.merges }

    /// Returns the `count` largest circuit sizes.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InsufficientComponents`] when fewer than
    /// `count` circuits exist.
    pub fn largest(&self, count: usize) -> Result<&[usize], AnalysisError> {
        self.sizes
            .get(..count)
            .ok_or(AnalysisError::InsufficientComponents {
                required: count,
                available: self.sizes.len(),
            })
    }

    /// Returns the product of the `count` largest circuit sizes, or `None`
    /// inside `Ok` when it overflows `u64`.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InsufficientComponents`] when fewer than
    /// `count` circuits exist.
    pub fn checked_product_of_largest(&self, count: usize) -> Result<Option<u64>, AnalysisError> {
        let product = self
            .largest(count)?
            .iter()
            .try_fold(1_u64, |acc, &size| {
                u64::try_from(size).ok().and_then(|size| acc.checked_mul(size))
            });
        Ok(product)
    }
}

/// Applies the `budget` smallest pairs to a fresh forest and reports the
/// resulting circuit sizes.
///
/// A budget larger than the pair list applies every pair; a budget of zero
/// leaves every point in its own circuit.
///
/// # Errors
/// Returns [`AnalysisError::Forest`] if a pair references a point outside the
/// forest, which cannot happen for pairs built by [`SortedPairs`].
#[instrument(
    name = "clusters.analyze",
    skip(pairs),
    fields(points = pairs.node_count(), pair_count = pairs.len()),
)]
pub fn analyze_clusters(pairs: &SortedPairs, budget: usize) -> Result<ClusterReport, AnalysisError> {
    let mut forest = DisjointSetForest::new(pairs.node_count());
    let applied = pairs.prefix(budget);
    let mut merges = 0_usize;
    for pair in applied {
        if forest.union(pair.left(), pair.right())?.is_merged() {
            merges += 1;
        }
    }

    let mut sizes = forest.component_sizes();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    debug!(
        applied = applied.len(),
        merges,
        circuits = sizes.len(),
        largest = sizes.first().copied().unwrap_or(0),
        "bounded pass complete"
    );

    Ok(ClusterReport {
        sizes,
        edges_applied: applied.len(),
        merges,
    })
}

#[cfg(test)]
mod tests;
