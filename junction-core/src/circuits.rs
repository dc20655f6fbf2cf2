//! Circuit analysis orchestration.
//!
//! [`Circuits`] turns a [`PointSource`] into the two puzzle answers: the
//! product of the largest circuit sizes after the bounded pass, and the
//! product of the X coordinates joined by the last connecting pair. The pair
//! list is generated once per run and each analysis drives its own forest.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::{Span, field, info, instrument};

use crate::{
    Result,
    builder::ExecutionStrategy,
    cluster::{ClusterReport, analyze_clusters},
    connectivity::{LastConnection, find_last_connection},
    error::{AnalysisError, ForestError, JunctionError, PairError},
    pairs::SortedPairs,
    point::{Point, PointSet, PointSource},
};

/// Outcome of the bounded cluster pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusterAnswer {
    report: ClusterReport,
    product: u64,
}

impl ClusterAnswer {
    /// Returns the full circuit report.
    #[must_use]
    pub fn report(&self) -> &ClusterReport {
        &self.report
    }

    /// Returns the product of the largest circuit sizes.
    #[must_use]
    #[rustfmt::skip]
    pub fn product(&self) -> u64 { self.product }
}

/// Outcome of the connectivity pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConnectionAnswer {
    connection: LastConnection,
    endpoints: (Point, Point),
    x_product: i64,
}

impl ConnectionAnswer {
    /// Returns the last connecting pair.
    #[must_use]
    #[rustfmt::skip]
    pub fn connection(&self) -> LastConnection { self.connection }

    /// Returns the coordinates of both endpoints, smaller index first.
    #[must_use]
    #[rustfmt::skip]
    pub fn endpoints(&self) -> (Point, Point) { self.endpoints }

    /// Returns the product of the endpoints' X coordinates.
    #[must_use]
    #[rustfmt::skip]
    pub fn x_product(&self) -> i64 { self.x_product }
}

/// Both answers for one point source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CircuitReport {
    clusters: ClusterAnswer,
    connection: ConnectionAnswer,
}

impl CircuitReport {
    /// Returns the bounded cluster pass outcome.
    #[must_use]
    pub fn clusters(&self) -> &ClusterAnswer {
        &self.clusters
    }

    /// Returns the connectivity pass outcome.
    #[must_use]
    pub fn connection(&self) -> &ConnectionAnswer {
        &self.connection
    }

    /// Returns the product of the largest circuit sizes.
    #[must_use]
    pub fn part_one(&self) -> u64 {
        self.clusters.product
    }

    /// Returns the X-coordinate product of the last connecting pair.
    #[must_use]
    pub fn part_two(&self) -> i64 {
        self.connection.x_product
    }
}

/// Entry point for analysing junction box circuits.
///
/// # Examples
/// ```
/// use junction_core::{CircuitsBuilder, Point, PointSet};
///
/// let points = PointSet::new(vec![
///     Point::new(1, 0, 0),
///     Point::new(2, 0, 0),
///     Point::new(40, 0, 0),
///     Point::new(900, 0, 0),
/// ]);
/// let circuits = CircuitsBuilder::new()
///     .with_connection_budget(1)
///     .build()
///     .expect("builder must succeed");
/// let report = circuits.run(&points)?;
/// assert_eq!(report.part_one(), 2);
/// assert_eq!(report.part_two(), 40 * 900);
/// # Ok::<(), junction_core::JunctionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Circuits {
    connection_budget: usize,
    top_circuits: NonZeroUsize,
    execution_strategy: ExecutionStrategy,
}

impl Circuits {
    pub(crate) const fn new(
        connection_budget: usize,
        top_circuits: NonZeroUsize,
        execution_strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            connection_budget,
            top_circuits,
            execution_strategy,
        }
    }

    /// Returns how many of the smallest pairs the cluster pass applies.
    #[must_use]
    #[rustfmt::skip]
    pub fn connection_budget(&self) -> usize { self.connection_budget }

    /// Returns how many of the largest circuits are multiplied together.
    #[must_use]
    #[rustfmt::skip]
    pub fn top_circuits(&self) -> NonZeroUsize { self.top_circuits }

    /// Returns the execution strategy used for pair generation.
    #[must_use]
    #[rustfmt::skip]
    pub fn execution_strategy(&self) -> ExecutionStrategy { self.execution_strategy }

    /// Computes both answers for `source`.
    ///
    /// # Errors
    /// Returns [`JunctionError::EmptySource`] for an empty source,
    /// [`JunctionError::Pairs`] when pair generation fails,
    /// [`JunctionError::Analysis`] when either analysis reaches a terminal
    /// failure, and [`JunctionError::ProductOverflow`] when an answer does
    /// not fit its integer type.
    #[instrument(
        name = "circuits.run",
        err,
        skip(self, source),
        fields(data_source = source.name(), point_count = source.len(), part_one = field::Empty, part_two = field::Empty),
    )]
    pub fn run<S: PointSource + ?Sized>(&self, source: &S) -> Result<CircuitReport> {
        let name = non_empty_name(source)?;
        let pairs = self.sorted_pairs(&name, source.points())?;
        let clusters = self.cluster_answer(&name, &pairs)?;
        let connection = connection_answer(&name, source.points(), &pairs)?;

        let span = Span::current();
        span.record("part_one", clusters.product);
        span.record("part_two", connection.x_product);
        info!(
            pairs = pairs.len(),
            circuits = clusters.report.component_count(),
            "circuit analysis completed"
        );
        Ok(CircuitReport {
            clusters,
            connection,
        })
    }

    /// Computes only the bounded cluster answer for `source`.
    ///
    /// # Errors
    /// See [`Circuits::run`]; connectivity failures cannot occur here.
    #[instrument(
        name = "circuits.largest_circuits",
        err,
        skip(self, source),
        fields(data_source = source.name(), point_count = source.len()),
    )]
    pub fn largest_circuits<S: PointSource + ?Sized>(&self, source: &S) -> Result<ClusterAnswer> {
        let name = non_empty_name(source)?;
        let pairs = self.sorted_pairs(&name, source.points())?;
        self.cluster_answer(&name, &pairs)
    }

    /// Computes only the connectivity answer for `source`.
    ///
    /// # Errors
    /// See [`Circuits::run`]; ranking failures cannot occur here.
    #[instrument(
        name = "circuits.last_connection",
        err,
        skip(self, source),
        fields(data_source = source.name(), point_count = source.len()),
    )]
    pub fn last_connection<S: PointSource + ?Sized>(&self, source: &S) -> Result<ConnectionAnswer> {
        let name = non_empty_name(source)?;
        let pairs = self.sorted_pairs(&name, source.points())?;
        connection_answer(&name, source.points(), &pairs)
    }

    #[instrument(
        name = "circuits.generate_pairs",
        skip(self, name, points),
        fields(strategy = ?self.execution_strategy, point_count = points.len()),
    )]
    fn sorted_pairs(&self, name: &Arc<str>, points: &PointSet) -> Result<SortedPairs> {
        self.generate(points).map_err(|error| JunctionError::Pairs {
            data_source: Arc::clone(name),
            error,
        })
    }

    #[cfg(feature = "parallel")]
    fn generate(&self, points: &PointSet) -> core::result::Result<SortedPairs, PairError> {
        match self.execution_strategy {
            ExecutionStrategy::Sequential => SortedPairs::from_points(points),
            ExecutionStrategy::Parallel => SortedPairs::from_points_parallel(points),
        }
    }

    // The builder refuses `Parallel` when the feature is off.
    #[cfg(not(feature = "parallel"))]
    fn generate(&self, points: &PointSet) -> core::result::Result<SortedPairs, PairError> {
        SortedPairs::from_points(points)
    }

    fn cluster_answer(&self, name: &Arc<str>, pairs: &SortedPairs) -> Result<ClusterAnswer> {
        let report =
            analyze_clusters(pairs, self.connection_budget).map_err(|error| analysis(name, error))?;
        let product = report
            .checked_product_of_largest(self.top_circuits.get())
            .map_err(|error| analysis(name, error))?
            .ok_or_else(|| JunctionError::ProductOverflow {
                data_source: Arc::clone(name),
                quantity: "largest circuit product",
            })?;
        Ok(ClusterAnswer { report, product })
    }
}

fn connection_answer(
    name: &Arc<str>,
    points: &PointSet,
    pairs: &SortedPairs,
) -> Result<ConnectionAnswer> {
    let connection = find_last_connection(pairs).map_err(|error| analysis(name, error))?;
    let left = endpoint(name, points, connection.left())?;
    let right = endpoint(name, points, connection.right())?;
    let x_product = left
        .x()
        .checked_mul(right.x())
        .ok_or_else(|| JunctionError::ProductOverflow {
            data_source: Arc::clone(name),
            quantity: "last connection X product",
        })?;
    Ok(ConnectionAnswer {
        connection,
        endpoints: (left, right),
        x_product,
    })
}

fn endpoint(name: &Arc<str>, points: &PointSet, index: usize) -> Result<Point> {
    points.get(index).ok_or_else(|| {
        analysis(
            name,
            AnalysisError::Forest(ForestError::IndexOutOfBounds {
                index,
                len: points.len(),
            }),
        )
    })
}

fn non_empty_name<S: PointSource + ?Sized>(source: &S) -> Result<Arc<str>> {
    let name: Arc<str> = Arc::from(source.name());
    if source.is_empty() {
        return Err(JunctionError::EmptySource { data_source: name });
    }
    Ok(name)
}

fn analysis(name: &Arc<str>, error: AnalysisError) -> JunctionError {
    JunctionError::Analysis {
        data_source: Arc::clone(name),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::{builder::CircuitsBuilder, test_utils::point_set};

    fn circuits(budget: usize, top: usize) -> Circuits {
        CircuitsBuilder::new()
            .with_connection_budget(budget)
            .with_top_circuits(top)
            .build()
            .expect("configuration is valid")
    }

    #[test]
    fn empty_source_is_rejected() {
        let err = circuits(10, 3)
            .run(&PointSet::default())
            .expect_err("empty source must fail");
        assert_eq!(
            err,
            JunctionError::EmptySource {
                data_source: Arc::from("points"),
            }
        );
    }

    #[test]
    fn too_few_circuits_is_reported_not_indexed() {
        // Two points with a budget far above the single pair.
        let points = point_set(&[(0, 0, 0), (3, 0, 0)]);
        let err = circuits(1000, 3)
            .run(&points)
            .expect_err("a single circuit cannot be ranked three deep");
        assert_eq!(
            err.analysis_code(),
            Some(crate::error::AnalysisErrorCode::InsufficientComponents)
        );

        let clusters = circuits(1000, 1)
            .largest_circuits(&points)
            .expect("one circuit can be ranked");
        assert_eq!(clusters.report().sizes(), [2]);
        assert_eq!(clusters.product(), 2);
    }

    #[test]
    fn single_point_has_no_last_connection() {
        let err = circuits(1000, 1)
            .last_connection(&point_set(&[(5, 5, 5)]))
            .expect_err("one point cannot be connected");
        assert_eq!(
            err,
            JunctionError::Analysis {
                data_source: Arc::from("points"),
                error: AnalysisError::NotEnoughPoints { points: 1 },
            }
        );
    }

    #[test]
    fn overflowing_x_product_is_reported() {
        let points = point_set(&[(3_037_000_500, 0, 0), (3_037_000_501, 0, 0)]);
        let err = circuits(1, 1)
            .last_connection(&points)
            .expect_err("product exceeds i64");
        assert!(matches!(err, JunctionError::ProductOverflow { .. }));
    }

    #[rstest]
    #[case::triangle(&[(0, 0, 0), (10, 0, 0), (0, 5, 0)], 0, 1)]
    #[case::line(&[(1, 0, 0), (2, 0, 0), (4, 0, 0), (8, 0, 0)], 2, 3)]
    fn connection_endpoints_are_reported(
        #[case] coords: &[(i64, i64, i64)],
        #[case] left: usize,
        #[case] right: usize,
    ) {
        let points = point_set(coords);
        let answer = circuits(1, 1)
            .last_connection(&points)
            .expect("points must connect");
        assert_eq!(
            (answer.connection().left(), answer.connection().right()),
            (left, right)
        );
        let (a, b) = answer.endpoints();
        assert_eq!(answer.x_product(), a.x() * b.x());
    }

    #[test]
    fn run_combines_independent_analyses() {
        let points = point_set(&[(0, 0, 0), (10, 0, 0), (0, 5, 0)]);
        let report = circuits(1, 2).run(&points).expect("run must succeed");
        assert_eq!(report.clusters().report().sizes(), [2, 1]);
        assert_eq!(report.part_one(), 2);
        // The connectivity pass starts from a fresh forest, so the bounded
        // pass never shortens it.
        assert_eq!(report.connection().connection().edges_examined(), 2);
        assert_eq!(report.part_two(), 0);
    }
}
