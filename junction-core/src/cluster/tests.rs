//! Unit tests for the bounded-edge cluster analysis.

use rstest::rstest;

use crate::{
    error::AnalysisError,
    pairs::{Pair, SortedPairs},
    test_utils::point_set,
};

use super::analyze_clusters;

fn triangle() -> SortedPairs {
    SortedPairs::from_points(&point_set(&[(0, 0, 0), (10, 0, 0), (0, 5, 0)]))
        .expect("pairs must sort")
}

#[rstest]
#[case::no_pairs(0, vec![1, 1, 1], 0)]
#[case::one_pair(1, vec![2, 1], 1)]
#[case::two_pairs(2, vec![3], 2)]
#[case::all_pairs(3, vec![3], 2)]
fn triangle_sizes_follow_budget(
    #[case] budget: usize,
    #[case] expected: Vec<usize>,
    #[case] merges: usize,
) {
    let report = analyze_clusters(&triangle(), budget).expect("analysis must succeed");
    assert_eq!(report.sizes(), expected.as_slice());
    assert_eq!(report.merges(), merges);
    assert_eq!(report.sizes().iter().sum::<usize>(), 3);
}

#[test]
fn budget_beyond_pair_count_applies_every_pair() {
    // Two points yield a single pair; a budget of 1000 must not fail.
    let pairs = SortedPairs::from_points(&point_set(&[(0, 0, 0), (1, 1, 1)]))
        .expect("pairs must sort");
    let report = analyze_clusters(&pairs, 1000).expect("analysis must succeed");
    assert_eq!(report.edges_applied(), 1);
    assert_eq!(report.sizes(), [2]);
}

#[test]
fn redundant_pairs_still_consume_budget() {
    // 0-1, 1-2 and 0-2 form a triangle; the third pair joins nothing but is
    // still counted against the budget, so 3-4 is never applied.
    let pairs = SortedPairs::new(
        5,
        vec![
            Pair::new(0, 1, 1),
            Pair::new(1, 2, 2),
            Pair::new(0, 2, 3),
            Pair::new(3, 4, 4),
        ],
    )
    .expect("pairs must validate");
    let report = analyze_clusters(&pairs, 3).expect("analysis must succeed");
    assert_eq!(report.edges_applied(), 3);
    assert_eq!(report.merges(), 2);
    assert_eq!(report.sizes(), [3, 1, 1]);
}

#[test]
fn ranking_requires_enough_circuits() {
    let report = analyze_clusters(&triangle(), 1).expect("analysis must succeed");
    assert_eq!(report.largest(2), Ok(&[2, 1][..]));
    assert_eq!(
        report.checked_product_of_largest(3),
        Err(AnalysisError::InsufficientComponents {
            required: 3,
            available: 2,
        })
    );
}

#[test]
fn product_multiplies_largest_sizes() {
    let pairs = SortedPairs::new(
        9,
        vec![
            Pair::new(0, 1, 1),
            Pair::new(1, 2, 1),
            Pair::new(2, 3, 1),
            Pair::new(4, 5, 2),
            Pair::new(5, 6, 2),
            Pair::new(7, 8, 3),
        ],
    )
    .expect("pairs must validate");
    let report = analyze_clusters(&pairs, usize::MAX).expect("analysis must succeed");
    assert_eq!(report.sizes(), [4, 3, 2]);
    assert_eq!(report.checked_product_of_largest(3), Ok(Some(24)));
    assert_eq!(report.checked_product_of_largest(0), Ok(Some(1)));
}

#[test]
fn empty_point_set_yields_no_circuits() {
    let report =
        analyze_clusters(&SortedPairs::default(), 10).expect("analysis must succeed");
    assert_eq!(report.component_count(), 0);
    assert_eq!(report.edges_applied(), 0);
}
