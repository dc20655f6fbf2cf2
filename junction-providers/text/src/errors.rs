use thiserror::Error;

/// Errors raised while loading a text point source.
#[derive(Debug, Error)]
pub enum PointTextError {
    /// The reader produced no parseable points.
    #[error("input contains no junction boxes")]
    EmptyInput,
    /// Reading from the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single line was not accepted as a point.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LineRejection {
    /// The line did not split into exactly three fields.
    #[error("expected 3 comma-separated fields, found {found}")]
    FieldCount {
        /// Number of fields present.
        found: usize,
    },
    /// A field was not a signed 64-bit integer.
    #[error("field {axis} is not an integer: `{raw}`")]
    InvalidCoordinate {
        /// Axis name of the offending field.
        axis: char,
        /// The trimmed field text.
        raw: String,
    },
}
