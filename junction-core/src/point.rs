//! Junction box coordinates and the point sources that supply them.

use std::slice;

/// A junction box position in integer 3-D space.
///
/// # Examples
/// ```
/// use junction_core::Point;
///
/// let origin = Point::new(0, 0, 0);
/// let other = Point::new(3, 4, 12);
/// assert_eq!(origin.squared_distance(&other), Some(169));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Point {
    x: i64,
    y: i64,
    z: i64,
}

impl Point {
    /// Creates a point from its three coordinates.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Returns the X coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(&self) -> i64 { self.x }

    /// Returns the Y coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(&self) -> i64 { self.y }

    /// Returns the Z coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn z(&self) -> i64 { self.z }

    /// Returns the squared Euclidean distance to `other`.
    ///
    /// Only the relative order of distances matters to the analyses, so the
    /// square root is never taken. Returns `None` when any intermediate value
    /// overflows `i64`.
    #[must_use]
    pub fn squared_distance(&self, other: &Self) -> Option<i64> {
        let dx = other.x.checked_sub(self.x)?;
        let dy = other.y.checked_sub(self.y)?;
        let dz = other.z.checked_sub(self.z)?;
        dx.checked_mul(dx)?
            .checked_add(dy.checked_mul(dy)?)?
            .checked_add(dz.checked_mul(dz)?)
    }
}

impl From<(i64, i64, i64)> for Point {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

/// An ordered, immutable sequence of points indexed `0..len`.
///
/// A point has no identity beyond its index in the set.
///
/// # Examples
/// ```
/// use junction_core::{Point, PointSet};
///
/// let points: PointSet = [(0, 0, 0), (10, 0, 0)].into_iter().map(Point::from).collect();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.get(1).map(|p| p.x()), Some(10));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Wraps an owned list of points.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Iterates over the points in index order.
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Borrows the points as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Abstraction over anything that can hand the solver a named point set.
///
/// Providers (text files, generators, fixtures) implement this so the solver
/// can label its diagnostics and errors with the source name.
///
/// # Examples
/// ```
/// use junction_core::{Point, PointSet, PointSource};
///
/// struct Fixed(PointSet);
///
/// impl PointSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn points(&self) -> &PointSet { &self.0 }
/// }
///
/// let source = Fixed(PointSet::new(vec![Point::new(1, 2, 3)]));
/// assert_eq!(source.len(), 1);
/// assert!(!source.is_empty());
/// ```
pub trait PointSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the points supplied by this source.
    fn points(&self) -> &PointSet;

    /// Returns the number of points in the source.
    #[must_use]
    fn len(&self) -> usize {
        self.points().len()
    }

    /// Returns whether the source supplies no points.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PointSource for PointSet {
    fn name(&self) -> &str {
        "points"
    }

    fn points(&self) -> &PointSet {
        self
    }
}
