//! Command-line interface for the junction box circuit solver.
//!
//! The `run` command loads an `X,Y,Z` text file and reports the largest
//! circuit product and the last connection X product.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, PartSelection, RunCommand, Strategy,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
