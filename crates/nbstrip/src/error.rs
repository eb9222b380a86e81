use std::io;

use thiserror::Error;

/// Raised when reduction leaves nothing to emit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReduceError {
    /// Every block was blank, or filtered out by kind.
    #[error("no cells with content found in the notebook")]
    EmptyResult,
}

/// Failure to load a notebook document.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// The document could not be read.
    #[error("failed to read notebook: {0}")]
    Io(#[from] io::Error),
    /// The document is not a notebook in JSON form.
    #[error("invalid notebook JSON: {0}")]
    Json(#[from] serde_json::Error),
}
