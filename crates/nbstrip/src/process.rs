//! End-to-end extraction: notebook in, artifact text and file name out.

use tracing::debug;

use crate::{
    error::ReduceError,
    naming::output_file_name,
    notebook::Notebook,
    reducer::{ReduceOptions, reduce},
    render::OutputFormat,
    scanner::StripOptions,
};

/// Options for [`process`].
///
/// # Default
///
/// Every cell kind is kept, code cells are fully comment-stripped and the
/// output is a Python script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Drop markdown and raw cells.
    pub keep_only_code: bool,
    /// Strip comments from code cells.
    pub strip_comments: bool,
    /// Which comment kinds to strip.
    pub strip: StripOptions,
    /// Output flavour.
    pub format: OutputFormat,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            keep_only_code: false,
            strip_comments: true,
            strip: StripOptions::default(),
            format: OutputFormat::Python,
        }
    }
}

impl From<&ProcessOptions> for ReduceOptions {
    fn from(options: &ProcessOptions) -> Self {
        ReduceOptions {
            keep_only_code: options.keep_only_code,
            strip_comments: options.strip_comments,
            strip: options.strip,
        }
    }
}

/// The extracted artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// Rendered text.
    pub content: String,
    /// Suggested file name.
    pub filename: String,
    /// Number of code cells that passed filtering.
    pub cell_count: usize,
}

/// Extract `notebook` into a single artifact.
///
/// `original_name` is the notebook's file name, if known; it only affects
/// [`ProcessResult::filename`].
///
/// # Errors
///
/// [`ReduceError::EmptyResult`] when the notebook has no cell with content
/// (or no code cell with content when only code is kept).
pub fn process(
    notebook: &Notebook,
    options: &ProcessOptions,
    original_name: Option<&str>,
) -> Result<ProcessResult, ReduceError> {
    let reduced = reduce(notebook.blocks(), &options.into())?;
    debug!(
        cells = reduced.cells.len(),
        code_cells = reduced.code_cells,
        format = ?options.format,
        "reduced notebook"
    );

    Ok(ProcessResult {
        content: options.format.render(&reduced),
        filename: output_file_name(original_name, options.format),
        cell_count: reduced.code_cells,
    })
}
