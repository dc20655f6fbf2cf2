//! Benchmark support crate for junction.
//!
//! Provides seeded synthetic point clouds and parameter types used by the
//! Criterion benchmarks for pair generation and both circuit analyses.

pub mod error;
pub mod params;
pub mod source;
