//! Text provider for comma-separated junction box coordinates.
//!
//! Each non-blank line holds one box as `X,Y,Z` signed integers. Lines that
//! do not parse are skipped with a warning rather than failing the load.

mod errors;
mod parse;
mod provider;

pub use errors::{LineRejection, PointTextError};
pub use parse::parse_point_line;
pub use provider::PointTextProvider;
