//! Shared test utilities for `junction-core`.

use junction_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::point::{Point, PointSet};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a [`PointSet`] from coordinate triples.
#[must_use]
pub(crate) fn point_set(coords: &[(i64, i64, i64)]) -> PointSet {
    coords.iter().copied().map(Point::from).collect()
}
