//! Extract source code from Jupyter notebooks and strip its comments.
//!
//! The core is [`strip`], a line-oriented scanner that removes `#` comments
//! and documentation block strings from Python-like source while leaving
//! string literals alone. [`reduce`] applies it across notebook cells, and
//! [`process`] ties loading, reduction, rendering and file naming together.
//!
//! ```rust
//! use nbstrip::{Notebook, ProcessOptions, process};
//!
//! let nb = Notebook::from_json_str(
//!     r#"{"cells": [{"cell_type": "code", "source": ["x = 1  # one\n", "y = '#2'"]}]}"#,
//! )
//! .unwrap();
//! let out = process(&nb, &ProcessOptions::default(), Some("demo.ipynb")).unwrap();
//! assert_eq!(out.content, "# Cell 1 (Code)\nx = 1\ny = '#2'");
//! assert_eq!(out.filename, "demo_extracted.py");
//! ```

mod error;
mod naming;
mod notebook;
mod process;
mod reducer;
mod render;
mod scanner;

#[cfg(test)]
mod tests;

pub use error::{NotebookError, ReduceError};
pub use naming::{base_name, output_file_name};
pub use notebook::{Cell, CellSource, KernelSpec, LanguageInfo, Notebook, NotebookMetadata};
pub use process::{ProcessOptions, ProcessResult, process};
pub use reducer::{
    CellKind, ReduceOptions, Reduced, ReducedCell, SourceBlock, drop_blank, ensure_nonempty,
    reduce,
};
pub use render::{OutputFormat, render_markdown, render_python};
pub use scanner::{
    LineOutcome, ScanMode, ScanState, StripOptions, TripleQuote, strip, strip_line_comment,
    strip_with,
};
