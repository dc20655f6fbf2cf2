//! Error types for the junction core library.
//!
//! Every public error enum carries a stable, machine-readable code so the CLI
//! and log consumers can match on failures without parsing messages.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Misuse of a [`crate::DisjointSetForest`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ForestError {
    /// An element index fell outside `0..len`.
    #[error("element {index} is out of bounds for a forest of {len} elements")]
    IndexOutOfBounds {
        /// The offending element index.
        index: usize,
        /// Number of elements tracked by the forest.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// An element index fell outside `0..len`.
        IndexOutOfBounds => IndexOutOfBounds { .. } => "FOREST_INDEX_OUT_OF_BOUNDS",
    }
}

/// Errors raised while generating or validating the pair list.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PairError {
    /// The squared distance between two points does not fit in an `i64`.
    #[error("squared distance between points {left} and {right} overflows i64")]
    DistanceOverflow {
        /// Index of the first point.
        left: usize,
        /// Index of the second point.
        right: usize,
    },
    /// A pair referenced a point index that is not present.
    #[error("pair references point {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid point index.
        node: usize,
        /// Number of points the pair list was built for.
        node_count: usize,
    },
    /// A pair joined a point to itself.
    #[error("pair ({node}, {node}) joins a point to itself")]
    SelfPair {
        /// The repeated point index.
        node: usize,
    },
    /// A pair carried a negative squared distance.
    #[error("pair ({left}, {right}) has negative squared distance {distance_sq}")]
    NegativeDistance {
        /// Index of the first point.
        left: usize,
        /// Index of the second point.
        right: usize,
        /// The rejected distance.
        distance_sq: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`PairError`] variants.
    enum PairErrorCode for PairError {
        /// The squared distance between two points does not fit in an `i64`.
        DistanceOverflow => DistanceOverflow { .. } => "PAIR_DISTANCE_OVERFLOW",
        /// A pair referenced a point index that is not present.
        InvalidNodeId => InvalidNodeId { .. } => "PAIR_INVALID_NODE_ID",
        /// A pair joined a point to itself.
        SelfPair => SelfPair { .. } => "PAIR_SELF_PAIR",
        /// A pair carried a negative squared distance.
        NegativeDistance => NegativeDistance { .. } => "PAIR_NEGATIVE_DISTANCE",
    }
}

/// Terminal failures of the cluster and connectivity analyses.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AnalysisError {
    /// Fewer components survived than the ranking asked for.
    #[error("ranking requires {required} circuits but only {available} remain")]
    InsufficientComponents {
        /// Number of components the caller asked to rank.
        required: usize,
        /// Number of components that actually exist.
        available: usize,
    },
    /// Every pair was consumed without joining all points.
    #[error("pair list exhausted after {edges} pairs with {components} circuits remaining")]
    Exhausted {
        /// Components still live once the pairs ran out.
        components: usize,
        /// Number of pairs examined.
        edges: usize,
    },
    /// Connectivity needs at least two points to have a connecting pair.
    #[error("connectivity requires at least two points (got {points})")]
    NotEnoughPoints {
        /// Number of points supplied.
        points: usize,
    },
    /// The forest rejected an operation.
    #[error(transparent)]
    Forest(#[from] ForestError),
}

define_error_codes! {
    /// Stable codes describing [`AnalysisError`] variants.
    enum AnalysisErrorCode for AnalysisError {
        /// Fewer components survived than the ranking asked for.
        InsufficientComponents => InsufficientComponents { .. } => "ANALYSIS_INSUFFICIENT_COMPONENTS",
        /// Every pair was consumed without joining all points.
        Exhausted => Exhausted { .. } => "ANALYSIS_EXHAUSTED",
        /// Connectivity needs at least two points.
        NotEnoughPoints => NotEnoughPoints { .. } => "ANALYSIS_NOT_ENOUGH_POINTS",
        /// The forest rejected an operation.
        Forest => Forest(..) => "ANALYSIS_FOREST",
    }
}

/// Error type produced when configuring or running [`crate::Circuits`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum JunctionError {
    /// The number of circuits to rank must be greater than zero.
    #[error("top_circuits must be at least 1 (got {got})")]
    InvalidTopCircuits {
        /// The rejected value.
        got: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// The supplied [`crate::PointSource`] contained no points.
    #[error("point source `{data_source}` contains no points")]
    EmptySource {
        /// Identifier for the empty source.
        data_source: Arc<str>,
    },
    /// Pair generation failed.
    #[error("point source `{data_source}` failed while pairing: {error}")]
    Pairs {
        /// Identifier for the source being analysed.
        data_source: Arc<str>,
        #[source]
        /// Underlying pair error.
        error: PairError,
    },
    /// One of the analyses reached a terminal failure.
    #[error("point source `{data_source}` failed analysis: {error}")]
    Analysis {
        /// Identifier for the source being analysed.
        data_source: Arc<str>,
        #[source]
        /// Underlying analysis error.
        error: AnalysisError,
    },
    /// A reported product does not fit in its integer type.
    #[error("{quantity} for point source `{data_source}` overflows")]
    ProductOverflow {
        /// Identifier for the source being analysed.
        data_source: Arc<str>,
        /// Which answer overflowed.
        quantity: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`JunctionError`] variants.
    enum JunctionErrorCode for JunctionError {
        /// The number of circuits to rank must be greater than zero.
        InvalidTopCircuits => InvalidTopCircuits { .. } => "JUNCTION_INVALID_TOP_CIRCUITS",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "JUNCTION_BACKEND_UNAVAILABLE",
        /// The supplied point source contained no points.
        EmptySource => EmptySource { .. } => "JUNCTION_EMPTY_SOURCE",
        /// Pair generation failed.
        PairFailure => Pairs { .. } => "JUNCTION_PAIR_FAILURE",
        /// One of the analyses reached a terminal failure.
        AnalysisFailure => Analysis { .. } => "JUNCTION_ANALYSIS_FAILURE",
        /// A reported product does not fit in its integer type.
        ProductOverflow => ProductOverflow { .. } => "JUNCTION_PRODUCT_OVERFLOW",
    }
}

impl JunctionError {
    /// Retrieve the inner [`AnalysisErrorCode`] when an analysis failed.
    #[must_use]
    pub const fn analysis_code(&self) -> Option<AnalysisErrorCode> {
        match self {
            Self::Analysis { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`PairErrorCode`] when pair generation failed.
    #[must_use]
    pub const fn pair_code(&self) -> Option<PairErrorCode> {
        match self {
            Self::Pairs { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, JunctionError>;
