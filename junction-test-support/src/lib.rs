//! Shared test utilities used across junction crates.

pub mod ci;
pub mod fixtures;
pub mod tracing;
