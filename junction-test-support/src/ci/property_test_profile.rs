//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults; the
//! environment may raise or lower the case count and toggle forking.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const JUNCTION_PBT_FORK_ENV_KEY: &str = "JUNCTION_PBT_FORK";

/// Rejected override value.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OverrideError {
    /// The case count was not a positive integer.
    #[error("expected a positive integer case count")]
    InvalidCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of: true/false/1/0/yes/no/on/off")]
    InvalidFlag,
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from the process environment with provided defaults.
    ///
    /// Invalid overrides are logged and replaced by the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use junction_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Load a profile through `lookup` instead of the process environment.
    #[must_use]
    pub fn from_lookup<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cases: resolve(&lookup, PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(&lookup, JUNCTION_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T, L, P>(lookup: &L, key: &'static str, default: T, parse: P) -> T
where
    L: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, OverrideError>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %error,
            "invalid property-test profile override; using default",
        );
        default
    })
}

/// Parses a positive case count.
///
/// # Errors
/// Returns [`OverrideError::InvalidCases`] for zero or non-numeric input.
pub fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(OverrideError::InvalidCases),
        Ok(cases) => Ok(cases),
    }
}

/// Parses a boolean flag, case-insensitively.
///
/// # Errors
/// Returns [`OverrideError::InvalidFlag`] for unrecognised spellings.
pub fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::InvalidFlag),
    }
}
