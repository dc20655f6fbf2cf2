//! Seeded synthetic junction box clouds.
//!
//! Coordinates are drawn uniformly from `0..extent` on each axis, matching
//! the shape of real puzzle inputs. The same seed always yields the same
//! cloud so benchmark runs are comparable.

use junction_core::{Point, PointSet};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Configuration for a uniform point cloud.
#[derive(Clone, Debug)]
pub struct CloudConfig {
    /// Number of boxes to generate.
    pub point_count: usize,
    /// Exclusive upper bound for every coordinate.
    pub extent: i64,
    /// RNG seed.
    pub seed: u64,
}

/// Errors raised by synthetic cloud generation.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SyntheticError {
    /// The cloud would contain no boxes.
    #[error("point_count must be greater than zero")]
    ZeroPoints,
    /// The coordinate range is empty.
    #[error("extent must be positive (got {extent})")]
    InvalidExtent {
        /// Rejected extent.
        extent: i64,
    },
}

/// Generates a uniform cloud described by `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when `point_count` is zero or `extent` is not
/// positive.
///
/// # Examples
/// ```
/// use junction_benches::source::{CloudConfig, generate_cloud};
///
/// let points = generate_cloud(&CloudConfig { point_count: 8, extent: 100, seed: 7 })?;
/// assert_eq!(points.len(), 8);
/// # Ok::<(), junction_benches::source::SyntheticError>(())
/// ```
pub fn generate_cloud(config: &CloudConfig) -> Result<PointSet, SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if config.extent <= 0 {
        return Err(SyntheticError::InvalidExtent {
            extent: config.extent,
        });
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok((0..config.point_count)
        .map(|_| {
            Point::new(
                rng.gen_range(0..config.extent),
                rng.gen_range(0..config.extent),
                rng.gen_range(0..config.extent),
            )
        })
        .collect())
}
