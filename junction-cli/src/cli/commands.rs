//! Command implementations and argument parsing for the junction CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use junction_core::{
    Circuits, CircuitsBuilder, DEFAULT_CONNECTION_BUDGET, DEFAULT_TOP_CIRCUITS,
    ExecutionStrategy, JunctionError, PointSource,
};
use junction_providers_text::{PointTextError, PointTextProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_INPUT: &str = "input.txt";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "junction", about = "Join junction boxes into circuits.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Analyse a file of junction box coordinates.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Text file with one `X,Y,Z` box per line.
    #[arg(default_value = DEFAULT_INPUT)]
    pub path: PathBuf,

    /// Number of shortest pairs applied before ranking circuits.
    #[arg(long, default_value_t = DEFAULT_CONNECTION_BUDGET)]
    pub connections: usize,

    /// Number of largest circuits multiplied together.
    #[arg(long, default_value_t = DEFAULT_TOP_CIRCUITS)]
    pub top: usize,

    /// Which answers to compute.
    #[arg(long, value_enum, default_value_t = PartSelection::All)]
    pub part: PartSelection,

    /// How pairs are generated and sorted.
    #[arg(long, value_enum, default_value_t = Strategy::Sequential)]
    pub strategy: Strategy,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Answers the `run` command can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PartSelection {
    /// Both answers.
    All,
    /// Only the largest circuit product.
    Clusters,
    /// Only the last connection X product.
    Connectivity,
}

/// Execution strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Single-threaded pair generation.
    Sequential,
    /// Pair generation on the rayon pool; needs the `parallel` feature.
    Parallel,
}

impl From<Strategy> for ExecutionStrategy {
    fn from(value: Strategy) -> Self {
        match value {
            Strategy::Sequential => Self::Sequential,
            Strategy::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Text ingestion failed.
    #[error(transparent)]
    Text(#[from] PointTextError),
    /// Configuration or analysis failed.
    #[error(transparent)]
    Core(#[from] JunctionError),
}

/// Summarises the outcome of a `run` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Name reported by the point source.
    pub data_source: String,
    /// Number of boxes loaded.
    pub points: usize,
    /// Number of malformed lines skipped while loading.
    pub skipped: usize,
    /// Largest circuit product, when requested.
    pub part_one: Option<u64>,
    /// Last connection X product, when requested.
    pub part_two: Option<i64>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or analysis fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use junction_cli::cli::{Cli, Command, PartSelection, RunCommand, Strategy, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0,0,0\n10,0,0\n0,5,0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         connections: 1,
///         top: 2,
///         part: PartSelection::All,
///         strategy: Strategy::Sequential,
///         name: Some("demo".into()),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.part_one, Some(2));
/// assert_eq!(summary.part_two, Some(0));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        connections = command.connections,
        top = command.top,
        part = field::Empty,
        strategy = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        connections,
        top,
        part,
        strategy,
        name,
    } = command;
    let span = Span::current();
    span.record("part", field::debug(part));
    span.record("strategy", field::debug(strategy));

    let circuits = CircuitsBuilder::new()
        .with_connection_budget(connections)
        .with_top_circuits(top)
        .with_execution_strategy(strategy.into())
        .build()?;

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_text_reader(&path)?;
    let provider = PointTextProvider::try_from_reader(chosen_name, reader)?;
    let summary = solve(&circuits, &provider, part)?;

    info!(
        data_source = summary.data_source.as_str(),
        points = summary.points,
        skipped = summary.skipped,
        "command completed"
    );
    Ok(summary)
}

fn solve(
    circuits: &Circuits,
    provider: &PointTextProvider,
    part: PartSelection,
) -> Result<ExecutionSummary, CliError> {
    let (part_one, part_two) = match part {
        PartSelection::All => {
            let report = circuits.run(provider)?;
            (Some(report.part_one()), Some(report.part_two()))
        }
        PartSelection::Clusters => (Some(circuits.largest_circuits(provider)?.product()), None),
        PartSelection::Connectivity => (None, Some(circuits.last_connection(provider)?.x_product())),
    };
    Ok(ExecutionSummary {
        data_source: provider.name().to_owned(),
        points: provider.len(),
        skipped: provider.skipped(),
        part_one,
        part_two,
    })
}

#[instrument(name = "cli.open_text_reader", err, fields(path = field::Empty))]
pub(super) fn open_text_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "junction_boxes".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as `key: value` lines.
///
/// Parts that were not requested are omitted.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use junction_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     points: 20,
///     skipped: 0,
///     part_one: Some(40),
///     part_two: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "data source: demo\npoints: 20\nskipped: 0\npart 1: 40\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "points: {}", summary.points)?;
    writeln!(writer, "skipped: {}", summary.skipped)?;
    if let Some(value) = summary.part_one {
        writeln!(writer, "part 1: {value}")?;
    }
    if let Some(value) = summary.part_two {
        writeln!(writer, "part 2: {value}")?;
    }
    Ok(())
}
