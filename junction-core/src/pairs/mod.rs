//! Pairwise distance generation and the globally sorted pair list.
//!
//! Every unordered pair of points is materialised and sorted before either
//! analysis runs. Generation is quadratic in the number of points and uses no
//! spatial index.
//!
//! Pairs are totally ordered by `(distance_sq, left, right)`. Equal squared
//! distances are therefore resolved by the lower index pair, so the sorted
//! list is identical on every platform and for every execution strategy.

use std::{cmp::Ordering, slice};

use tracing::{debug, instrument};

use crate::{error::PairError, point::PointSet};

/// An unordered pair of point indices weighted by squared distance.
///
/// Stored in canonical form (`left < right`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Pair {
    distance_sq: i64,
    left: usize,
    right: usize,
}

impl Pair {
    /// Creates a pair, swapping the endpoints into canonical order.
    ///
    /// # Examples
    /// ```
    /// use junction_core::Pair;
    ///
    /// let pair = Pair::new(5, 2, 25);
    /// assert_eq!((pair.left(), pair.right()), (2, 5));
    /// ```
    #[must_use]
    pub const fn new(left: usize, right: usize, distance_sq: i64) -> Self {
        let (left, right) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            distance_sq,
            left,
            right,
        }
    }

    /// Returns the smaller endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> usize { self.left }

    /// Returns the larger endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> usize { self.right }

    /// Returns the squared Euclidean distance between the endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance_sq(&self) -> i64 { self.distance_sq }
}

impl Ord for Pair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_sq
            .cmp(&other.distance_sq)
            .then_with(|| self.left.cmp(&other.left))
            .then_with(|| self.right.cmp(&other.right))
    }
}

impl PartialOrd for Pair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Enumerates all `n * (n - 1) / 2` unordered pairs of `points`.
///
/// Pairs are produced in row-major order (`(0, 1), (0, 2), ..., (1, 2), ...`)
/// and are not sorted.
///
/// # Errors
/// Returns [`PairError::DistanceOverflow`] when a squared distance does not
/// fit in an `i64`.
///
/// # Examples
/// ```
/// use junction_core::{Point, PointSet, pairwise_distances};
///
/// let points = PointSet::new(vec![
///     Point::new(0, 0, 0),
///     Point::new(10, 0, 0),
///     Point::new(0, 5, 0),
/// ]);
/// let pairs = pairwise_distances(&points)?;
/// let distances: Vec<i64> = pairs.iter().map(|p| p.distance_sq()).collect();
/// assert_eq!(distances, [100, 25, 125]);
/// # Ok::<(), junction_core::PairError>(())
/// ```
pub fn pairwise_distances(points: &PointSet) -> Result<Vec<Pair>, PairError> {
    let mut pairs = Vec::with_capacity(pair_count(points.len()));
    for left in 0..points.len() {
        push_row(points, left, &mut pairs)?;
    }
    Ok(pairs)
}

#[cfg(feature = "parallel")]
fn par_pairwise_distances(points: &PointSet) -> Result<Vec<Pair>, PairError> {
    use rayon::prelude::*;

    let rows = (0..points.len())
        .into_par_iter()
        .map(|left| {
            let mut row = Vec::with_capacity(points.len().saturating_sub(left + 1));
            push_row(points, left, &mut row)?;
            Ok(row)
        })
        .collect::<Result<Vec<_>, PairError>>()?;
    let mut pairs = Vec::with_capacity(pair_count(points.len()));
    for row in rows {
        pairs.extend(row);
    }
    Ok(pairs)
}

fn push_row(points: &PointSet, left: usize, out: &mut Vec<Pair>) -> Result<(), PairError> {
    let Some(origin) = points.get(left) else {
        return Ok(());
    };
    for (right, other) in points.iter().enumerate().skip(left + 1) {
        let distance_sq = origin
            .squared_distance(other)
            .ok_or(PairError::DistanceOverflow { left, right })?;
        out.push(Pair::new(left, right, distance_sq));
    }
    Ok(())
}

const fn pair_count(node_count: usize) -> usize {
    node_count.saturating_mul(node_count.saturating_sub(1)) / 2
}

/// A pair list sorted ascending by squared distance, bound to the number of
/// points it was built for.
///
/// Both analyses consume the same `SortedPairs` immutably; each drives its own
/// forest over it.
///
/// # Examples
/// ```
/// use junction_core::{Point, PointSet, SortedPairs};
///
/// let points = PointSet::new(vec![
///     Point::new(0, 0, 0),
///     Point::new(10, 0, 0),
///     Point::new(0, 5, 0),
/// ]);
/// let sorted = SortedPairs::from_points(&points)?;
/// let order: Vec<(usize, usize)> = sorted.iter().map(|p| (p.left(), p.right())).collect();
/// assert_eq!(order, [(0, 2), (0, 1), (1, 2)]);
/// # Ok::<(), junction_core::PairError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortedPairs {
    pairs: Vec<Pair>,
    node_count: usize,
}

impl SortedPairs {
    /// Generates and sorts every pair of `points` on the current thread.
    ///
    /// # Errors
    /// Returns [`PairError::DistanceOverflow`] when a squared distance does
    /// not fit in an `i64`.
    #[instrument(name = "pairs.from_points", skip(points), fields(point_count = points.len()))]
    pub fn from_points(points: &PointSet) -> Result<Self, PairError> {
        let mut pairs = pairwise_distances(points)?;
        pairs.sort_unstable();
        debug!(pairs = pairs.len(), "pair list sorted");
        Ok(Self {
            pairs,
            node_count: points.len(),
        })
    }

    /// Generates and sorts every pair of `points` on the rayon thread pool.
    ///
    /// The ordering is total, so the result is identical to
    /// [`SortedPairs::from_points`].
    ///
    /// # Errors
    /// Returns [`PairError::DistanceOverflow`] when a squared distance does
    /// not fit in an `i64`.
    #[cfg(feature = "parallel")]
    #[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
    #[instrument(name = "pairs.from_points_parallel", skip(points), fields(point_count = points.len()))]
    pub fn from_points_parallel(points: &PointSet) -> Result<Self, PairError> {
        use rayon::slice::ParallelSliceMut;

        let mut pairs = par_pairwise_distances(points)?;
        pairs.par_sort_unstable();
        debug!(pairs = pairs.len(), "pair list sorted");
        Ok(Self {
            pairs,
            node_count: points.len(),
        })
    }

    /// Validates and sorts caller-supplied pairs.
    ///
    /// # Errors
    /// Returns [`PairError::InvalidNodeId`] when an endpoint is not below
    /// `node_count`, [`PairError::SelfPair`] when both endpoints match, and
    /// [`PairError::NegativeDistance`] when a distance is negative.
    ///
    /// # Examples
    /// ```
    /// use junction_core::{Pair, PairError, SortedPairs};
    ///
    /// let sorted = SortedPairs::new(3, vec![Pair::new(1, 2, 9), Pair::new(0, 1, 4)])?;
    /// assert_eq!(sorted.as_slice()[0], Pair::new(0, 1, 4));
    ///
    /// let err = SortedPairs::new(2, vec![Pair::new(0, 2, 1)]).unwrap_err();
    /// assert_eq!(err, PairError::InvalidNodeId { node: 2, node_count: 2 });
    /// # Ok::<(), PairError>(())
    /// ```
    pub fn new(node_count: usize, mut pairs: Vec<Pair>) -> Result<Self, PairError> {
        for pair in &pairs {
            validate_pair(pair, node_count)?;
        }
        pairs.sort_unstable();
        Ok(Self { pairs, node_count })
    }

    /// Returns the number of points the pairs index into.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns whether the list holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the pairs in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    /// Borrows the sorted pairs.
    #[must_use]
    pub fn as_slice(&self) -> &[Pair] {
        &self.pairs
    }

    /// Returns at most the `count` smallest pairs.
    #[must_use]
    pub fn prefix(&self, count: usize) -> &[Pair] {
        let end = count.min(self.pairs.len());
        self.pairs.get(..end).unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a SortedPairs {
    type Item = &'a Pair;
    type IntoIter = slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_pair(pair: &Pair, node_count: usize) -> Result<(), PairError> {
    // Canonical form guarantees `left <= right`, so only `right` can overflow.
    if pair.right >= node_count {
        return Err(PairError::InvalidNodeId {
            node: pair.right,
            node_count,
        });
    }
    if pair.left == pair.right {
        return Err(PairError::SelfPair { node: pair.left });
    }
    if pair.distance_sq < 0 {
        return Err(PairError::NegativeDistance {
            left: pair.left,
            right: pair.right,
            distance_sq: pair.distance_sq,
        });
    }
    Ok(())
}

#[cfg(test)]
mod property;
