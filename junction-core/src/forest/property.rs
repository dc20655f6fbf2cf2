//! Property-based tests for the disjoint-set forest.
//!
//! Random operation sequences are replayed against the forest and a naive
//! label-propagation oracle. After every step the partition, equivalence,
//! idempotence and counter invariants are checked.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;
use test_strategy::Arbitrary;

use crate::test_utils::suite_proptest_config;

use super::{DisjointSetForest, Merge};

const MAX_ELEMENTS: usize = 48;

#[derive(Arbitrary, Clone, Copy, Debug)]
enum ForestOp {
    Union(#[strategy(0..MAX_ELEMENTS)] usize, #[strategy(0..MAX_ELEMENTS)] usize),
    Find(#[strategy(0..MAX_ELEMENTS)] usize),
}

/// Reference partition: every element carries an explicit label and a merge
/// relabels one whole side.
struct LabelOracle {
    labels: Vec<usize>,
}

impl LabelOracle {
    fn new(len: usize) -> Self {
        Self {
            labels: (0..len).collect(),
        }
    }

    fn union(&mut self, left: usize, right: usize) -> bool {
        let from = self.labels[right];
        let to = self.labels[left];
        if from == to {
            return false;
        }
        for label in &mut self.labels {
            if *label == from {
                *label = to;
            }
        }
        true
    }

    fn same(&self, left: usize, right: usize) -> bool {
        self.labels[left] == self.labels[right]
    }

    fn component_count(&self) -> usize {
        let mut labels = self.labels.clone();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }
}

fn run_forest_properties(len: usize, ops: &[ForestOp]) -> TestCaseResult {
    let mut forest = DisjointSetForest::new(len);
    let mut oracle = LabelOracle::new(len);

    for op in ops {
        let before = forest.component_count();
        match *op {
            ForestOp::Union(left, right) if left < len && right < len => {
                let expected = oracle.union(left, right);
                let merge = forest
                    .union(left, right)
                    .map_err(|err| TestCaseError::fail(err.to_string()))?;
                prop_assert_eq!(merge.is_merged(), expected);
                if merge.is_merged() {
                    prop_assert_eq!(forest.component_count(), before - 1);
                } else {
                    prop_assert_eq!(merge, Merge::AlreadyJoined { root: merge.root() });
                    prop_assert_eq!(forest.component_count(), before);
                }
            }
            ForestOp::Find(node) if node < len => {
                let root = forest
                    .find(node)
                    .map_err(|err| TestCaseError::fail(err.to_string()))?;
                prop_assert_eq!(forest.find(root), Ok(root));
                prop_assert_eq!(forest.component_count(), before);
            }
            ForestOp::Union(left, right) => {
                prop_assert!(forest.union(left, right).is_err());
                prop_assert_eq!(forest.component_count(), before);
            }
            ForestOp::Find(node) => {
                prop_assert!(forest.find(node).is_err());
            }
        }

        prop_assert_eq!(forest.component_count(), oracle.component_count());
        let sizes = forest.component_sizes();
        prop_assert_eq!(sizes.iter().sum::<usize>(), len);
        prop_assert_eq!(sizes.len(), forest.component_count());
    }

    for left in 0..len {
        for right in 0..len {
            let connected = forest
                .connected(left, right)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            prop_assert_eq!(connected, oracle.same(left, right));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn forest_matches_label_oracle(
        len in 1..MAX_ELEMENTS,
        ops in prop::collection::vec(any::<ForestOp>(), 0..128),
    ) {
        run_forest_properties(len, &ops)?;
    }
}

#[test]
fn oracle_relabels_whole_component() {
    let mut oracle = LabelOracle::new(4);
    assert!(oracle.union(0, 1));
    assert!(oracle.union(2, 3));
    assert!(oracle.union(1, 3));
    assert!(!oracle.union(0, 2));
    assert!(oracle.same(0, 3));
    assert_eq!(oracle.component_count(), 1);
}
