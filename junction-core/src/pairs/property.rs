//! Property-based tests for the sorted pair list and the analyses built on it.
//!
//! Random small clouds, including many duplicate coordinates to force ties,
//! are checked for ordering, completeness, and run-to-run determinism.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::{
    analyze_clusters, find_last_connection,
    point::{Point, PointSet},
    test_utils::suite_proptest_config,
};

use super::SortedPairs;

const MAX_POINTS: usize = 24;

fn cloud() -> impl Strategy<Value = PointSet> {
    // A narrow coordinate range produces plenty of equal distances.
    prop::collection::vec((-4_i64..4, -4_i64..4, -4_i64..4), 0..MAX_POINTS)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

fn run_pair_properties(points: &PointSet) -> TestCaseResult {
    let sorted = SortedPairs::from_points(points)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let n = points.len();
    prop_assert_eq!(sorted.len(), n * n.saturating_sub(1) / 2);
    prop_assert!(sorted.as_slice().windows(2).all(|w| w[0] < w[1]));
    prop_assert!(sorted.iter().all(|pair| pair.left() < pair.right() && pair.right() < n));

    let again = SortedPairs::from_points(points)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    prop_assert_eq!(&sorted, &again);
    Ok(())
}

fn run_analysis_properties(points: &PointSet, budget: usize) -> TestCaseResult {
    let sorted = SortedPairs::from_points(points)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let report =
        analyze_clusters(&sorted, budget).map_err(|err| TestCaseError::fail(err.to_string()))?;
    prop_assert_eq!(report.sizes().iter().sum::<usize>(), points.len());
    prop_assert!(report.sizes().windows(2).all(|w| w[0] >= w[1]));
    prop_assert_eq!(report.edges_applied(), budget.min(sorted.len()));
    prop_assert_eq!(report.component_count(), points.len() - report.merges());

    if points.len() >= 2 {
        let last = find_last_connection(&sorted)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        // The monitor stops after exactly n - 1 merges, so it never examines
        // fewer pairs than that.
        prop_assert!(last.edges_examined() >= points.len() - 1);
        prop_assert_eq!(sorted.as_slice().get(last.edges_examined() - 1), Some(&last.pair()));
        let repeat = find_last_connection(&sorted)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(last, repeat);
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn sorted_pairs_are_complete_and_strictly_ordered(points in cloud()) {
        run_pair_properties(&points)?;
    }

    #[test]
    fn analyses_are_consistent_and_deterministic(points in cloud(), budget in 0_usize..300) {
        run_analysis_properties(&points, budget)?;
    }
}
