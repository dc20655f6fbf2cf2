//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, PartSelection, RunCommand, Strategy};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// Builds a `run` command with the defaults clap would apply.
pub(super) fn run_args(path: PathBuf) -> RunCommand {
    RunCommand {
        path,
        connections: junction_core::DEFAULT_CONNECTION_BUDGET,
        top: junction_core::DEFAULT_TOP_CIRCUITS,
        part: PartSelection::All,
        strategy: Strategy::Sequential,
        name: None,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
