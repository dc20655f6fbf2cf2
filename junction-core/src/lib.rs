//! Junction core library.
//!
//! Groups junction boxes in 3-D space into circuits by joining the closest
//! pairs first. Two analyses share one globally sorted pair list: a bounded
//! pass that ranks circuit sizes after a fixed number of pairs, and a
//! connectivity pass that finds the pair joining the final two circuits.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod circuits;
mod cluster;
mod connectivity;
mod error;
mod forest;
mod pairs;
mod point;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{
        CircuitsBuilder, DEFAULT_CONNECTION_BUDGET, DEFAULT_TOP_CIRCUITS, ExecutionStrategy,
    },
    circuits::{CircuitReport, Circuits, ClusterAnswer, ConnectionAnswer},
    cluster::{ClusterReport, analyze_clusters},
    connectivity::{ConnectivityMonitor, LastConnection, MonitorState, find_last_connection},
    error::{
        AnalysisError, AnalysisErrorCode, ForestError, ForestErrorCode, JunctionError,
        JunctionErrorCode, PairError, PairErrorCode, Result,
    },
    forest::{DisjointSetForest, Merge},
    pairs::{Pair, SortedPairs, pairwise_distances},
    point::{Point, PointSet, PointSource},
};
