//! Reducer: filters notebook cells and strips comments from the survivors.
//!
//! Filtering happens in two stages with different failure semantics:
//! - [`drop_blank`] silently discards whitespace-only cells (and non-code
//!   cells when only code is wanted);
//! - [`ensure_nonempty`] rejects the whole request when nothing is left.
//!
//! [`reduce`] composes both and then runs the scanner over each code cell.
//! Every cell gets a fresh scanner state; nothing carries from one cell to
//! the next.

use serde::Deserialize;
use tracing::debug;

use crate::{
    error::ReduceError,
    scanner::{StripOptions, strip_with},
};

/// Kind of a notebook cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// Source code in the notebook's scripting language.
    Code,
    /// Prose documentation.
    Markdown,
    /// Anything else (`raw` cells and unknown kinds).
    #[serde(other)]
    Raw,
}

impl CellKind {
    /// Label used in rendered output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CellKind::Code => "Code",
            CellKind::Markdown => "Markdown",
            CellKind::Raw => "Raw",
        }
    }
}

/// One cell's kind and its source, joined into a single string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBlock {
    /// Cell kind reported by the notebook.
    pub kind: CellKind,
    /// Cell source text.
    pub text: String,
}

impl SourceBlock {
    /// Convenience constructor.
    pub fn new(kind: CellKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// A cell that survived reduction, tagged with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedCell {
    /// Zero-based index of the cell in the original sequence.
    pub index: usize,
    /// Cell kind.
    pub kind: CellKind,
    /// Cell text, comment-stripped for code cells when requested.
    pub text: String,
}

/// Result of [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduced {
    /// Surviving cells in input order.
    pub cells: Vec<ReducedCell>,
    /// Number of code cells that passed filtering.
    ///
    /// A code cell that becomes blank after stripping is left out of
    /// `cells` but still counted here.
    pub code_cells: usize,
}

/// Options for [`reduce`].
///
/// # Default
///
/// All cell kinds are kept and code cells are fully comment-stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceOptions {
    /// Drop markdown and raw cells.
    pub keep_only_code: bool,
    /// Run the scanner over code cells.
    pub strip_comments: bool,
    /// Which comment kinds the scanner removes when `strip_comments` is set.
    pub strip: StripOptions,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            keep_only_code: false,
            strip_comments: true,
            strip: StripOptions::default(),
        }
    }
}

/// Silently drop blank cells, and non-code cells when `keep_only_code` is
/// set. Survivors keep their original index.
pub fn drop_blank<I>(blocks: I, keep_only_code: bool) -> Vec<ReducedCell>
where
    I: IntoIterator<Item = SourceBlock>,
{
    let mut seen = 0usize;
    let kept: Vec<ReducedCell> = blocks
        .into_iter()
        .enumerate()
        .inspect(|_| seen += 1)
        .filter(|(_, block)| !block.text.trim().is_empty())
        .filter(|(_, block)| !keep_only_code || block.kind == CellKind::Code)
        .map(|(index, block)| ReducedCell {
            index,
            kind: block.kind,
            text: block.text,
        })
        .collect();

    debug!(
        total = seen,
        kept = kept.len(),
        keep_only_code,
        "filtered blank cells"
    );
    kept
}

/// Reject an empty cell sequence.
///
/// # Errors
///
/// [`ReduceError::EmptyResult`] when `cells` is empty.
pub fn ensure_nonempty(cells: Vec<ReducedCell>) -> Result<Vec<ReducedCell>, ReduceError> {
    if cells.is_empty() {
        return Err(ReduceError::EmptyResult);
    }
    Ok(cells)
}

/// Filter `blocks` and strip comments from the surviving code cells.
///
/// # Errors
///
/// [`ReduceError::EmptyResult`] when no cell survives filtering. No partial
/// output is produced in that case.
pub fn reduce<I>(blocks: I, options: &ReduceOptions) -> Result<Reduced, ReduceError>
where
    I: IntoIterator<Item = SourceBlock>,
{
    let kept = ensure_nonempty(drop_blank(blocks, options.keep_only_code))?;
    let code_cells = kept.iter().filter(|c| c.kind == CellKind::Code).count();

    let mut cells = Vec::with_capacity(kept.len());
    for mut cell in kept {
        if cell.kind == CellKind::Code && options.strip_comments {
            cell.text = strip_with(&cell.text, options.strip);
            if cell.text.trim().is_empty() {
                debug!(index = cell.index, "code cell empty after stripping");
                continue;
            }
        }
        cells.push(cell);
    }

    Ok(Reduced { cells, code_cells })
}
