//! Command-line interface for nbstrip.
//!
//! Reads a Jupyter notebook, keeps its code (and optionally its prose),
//! strips comments from code cells and writes a script or markdown file.
//!
//! Usage:
//!   nbstrip `<notebook>` [--format python|markdown] [--code-only] [--stdout | -o `<path>`]
//!   nbstrip - --stdout < notebook.ipynb

mod settings;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use nbstrip::{Notebook, process};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::settings::{Loader, NbstripConfig};

const STDIN_PATH: &str = "-";

#[derive(Debug, Parser)]
#[command(
    name = "nbstrip",
    version,
    about = "Extract code from a Jupyter notebook and strip its comments"
)]
struct Cli {
    /// Notebook to read, or `-` for standard input
    input: PathBuf,

    /// Write the result to this path instead of next to the input
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write the result to standard output
    #[arg(long)]
    stdout: bool,

    /// Output format
    #[arg(short, long, value_parser = ["python", "markdown"])]
    format: Option<String>,

    /// Keep only code cells
    #[arg(long)]
    code_only: bool,

    /// Leave code cells untouched
    #[arg(long)]
    keep_comments: bool,

    /// Keep trailing `#` comments
    #[arg(long, conflicts_with = "keep_comments")]
    keep_line_comments: bool,

    /// Keep documentation block strings
    #[arg(long, conflicts_with = "keep_comments")]
    keep_docstrings: bool,

    /// Configuration file layered over the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so that `--stdout` output stays clean. `-v` wins over
/// `RUST_LOG`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<NbstripConfig> {
    let mut loader = Loader::new();
    if let Some(path) = &cli.config {
        loader = loader.layer_file(path);
    }
    if let Some(format) = &cli.format {
        loader = loader.flag("output.format", format.as_str())?;
    }
    if cli.code_only {
        loader = loader.flag("extract.keep_only_code", true)?;
    }
    if cli.keep_comments {
        loader = loader.flag("extract.strip_comments", false)?;
    }
    if cli.keep_line_comments {
        loader = loader.flag("extract.line_comments", false)?;
    }
    if cli.keep_docstrings {
        loader = loader.flag("extract.block_strings", false)?;
    }
    loader.build().context("invalid configuration")
}

fn read_notebook(input: &Path) -> Result<Notebook> {
    if input == Path::new(STDIN_PATH) {
        return Notebook::from_reader(io::stdin().lock())
            .context("reading notebook from standard input");
    }
    Notebook::from_path(input).with_context(|| format!("reading {}", input.display()))
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let options = config.process_options();
    debug!(?options, "resolved options");

    let notebook = read_notebook(&cli.input)?;
    debug!(
        cells = notebook.cells.len(),
        nbformat = notebook.nbformat,
        language = notebook.language().unwrap_or("unknown"),
        "loaded notebook"
    );

    let from_stdin = cli.input == Path::new(STDIN_PATH);
    let original_name = if from_stdin {
        None
    } else {
        cli.input.to_str()
    };
    let result = process(&notebook, &options, original_name)
        .with_context(|| format!("cannot extract {}", cli.input.display()))?;

    if cli.stdout {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(result.content.as_bytes())
            .context("writing to standard output")?;
        stdout.flush().context("writing to standard output")?;
        return Ok(());
    }

    let target = match &cli.output {
        Some(path) => path.clone(),
        None if from_stdin => PathBuf::from(&result.filename),
        None => cli
            .input
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&result.filename),
    };
    fs::write(&target, &result.content)
        .with_context(|| format!("writing {}", target.display()))?;
    info!(
        path = %target.display(),
        code_cells = result.cell_count,
        "wrote extracted notebook"
    );
    Ok(())
}
