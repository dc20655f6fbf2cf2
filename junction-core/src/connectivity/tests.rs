//! Unit tests for the connectivity monitor.

use rstest::rstest;

use crate::{
    error::{AnalysisError, ForestError},
    pairs::{Pair, SortedPairs},
    test_utils::point_set,
};

use super::{ConnectivityMonitor, MonitorState, find_last_connection};

#[test]
fn triangle_connects_on_second_pair() {
    let pairs = SortedPairs::from_points(&point_set(&[(0, 0, 0), (10, 0, 0), (0, 5, 0)]))
        .expect("pairs must sort");
    let last = find_last_connection(&pairs).expect("points must connect");
    assert_eq!(last.pair(), Pair::new(0, 1, 100));
    assert_eq!(last.edges_examined(), 2);
}

#[test]
fn two_points_connect_on_their_only_pair() {
    let pairs = SortedPairs::from_points(&point_set(&[(4, 0, 0), (7, 0, 0)]))
        .expect("pairs must sort");
    let last = find_last_connection(&pairs).expect("points must connect");
    assert_eq!((last.left(), last.right()), (0, 1));
    assert_eq!(last.edges_examined(), 1);
}

#[test]
fn stops_at_the_connecting_pair() {
    // The pair after the connecting one references a point outside the
    // forest; reaching it would surface a forest error.
    let mut monitor = ConnectivityMonitor::new(3).expect("three points are enough");
    let stream = [Pair::new(0, 1, 1), Pair::new(1, 2, 2), Pair::new(0, 9, 3)];
    for pair in &stream {
        let state = monitor.observe(pair).expect("terminal monitor ignores pairs");
        if state.is_terminal() {
            break;
        }
    }
    assert!(matches!(monitor.state(), MonitorState::Connected(last) if last.edges_examined() == 2));
    assert!(monitor.observe(&Pair::new(0, 9, 3)).is_ok());
}

#[test]
fn redundant_pairs_do_not_trigger_connection() {
    let pairs = SortedPairs::new(
        4,
        vec![
            Pair::new(0, 1, 1),
            Pair::new(1, 2, 2),
            Pair::new(0, 2, 3),
            Pair::new(2, 3, 4),
            Pair::new(0, 3, 5),
        ],
    )
    .expect("pairs must validate");
    let last = find_last_connection(&pairs).expect("points must connect");
    assert_eq!(last.pair(), Pair::new(2, 3, 4));
    assert_eq!(last.edges_examined(), 4);
}

#[test]
fn incomplete_pair_list_is_exhausted() {
    let pairs = SortedPairs::new(4, vec![Pair::new(0, 1, 1), Pair::new(2, 3, 2)])
        .expect("pairs must validate");
    assert_eq!(
        find_last_connection(&pairs),
        Err(AnalysisError::Exhausted {
            components: 2,
            edges: 2,
        })
    );
}

#[test]
fn finish_moves_scanning_to_exhausted() {
    let mut monitor = ConnectivityMonitor::new(3).expect("three points are enough");
    monitor
        .observe(&Pair::new(0, 1, 1))
        .expect("pair is in range");
    assert_eq!(monitor.state(), MonitorState::Scanning { components: 2 });
    assert!(monitor.finish().is_err());
    assert_eq!(
        monitor.state(),
        MonitorState::Exhausted {
            components: 2,
            edges: 1,
        }
    );
}

#[rstest]
#[case::empty(0)]
#[case::single(1)]
fn fewer_than_two_points_is_rejected(#[case] points: usize) {
    assert_eq!(
        ConnectivityMonitor::new(points).map(|monitor| monitor.state()),
        Err(AnalysisError::NotEnoughPoints { points })
    );
}

#[test]
fn out_of_range_pair_surfaces_forest_error() {
    let mut monitor = ConnectivityMonitor::new(2).expect("two points are enough");
    assert_eq!(
        monitor.observe(&Pair::new(0, 5, 1)),
        Err(AnalysisError::Forest(ForestError::IndexOutOfBounds {
            index: 5,
            len: 2,
        }))
    );
    assert_eq!(monitor.state(), MonitorState::Scanning { components: 2 });
}
