//! Jupyter notebook document model.
//!
//! Only the parts the extractor reads are modelled. Unknown fields are
//! ignored, missing optional fields take their defaults.

use std::{fs::File, io, io::BufReader, path::Path};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::NotebookError,
    reducer::{CellKind, SourceBlock},
};

/// A parsed `.ipynb` document.
#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    /// Cells in document order.
    pub cells: Vec<Cell>,
    /// Document-level metadata.
    #[serde(default)]
    pub metadata: NotebookMetadata,
    /// Major format version.
    #[serde(default)]
    pub nbformat: u32,
    /// Minor format version.
    #[serde(default)]
    pub nbformat_minor: u32,
}

/// One notebook cell.
#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    /// Cell kind; unknown kinds read as [`CellKind::Raw`].
    pub cell_type: CellKind,
    /// Cell source, absent or `null` when the cell is empty.
    #[serde(default)]
    pub source: Option<CellSource>,
    /// Free-form cell metadata.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Execution counter of code cells.
    #[serde(default)]
    pub execution_count: Option<u64>,
    /// Stored outputs of code cells.
    #[serde(default)]
    pub outputs: Vec<Value>,
}

/// Cell source as stored on disk: one string or a list of line strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    /// Whole source in one string.
    Text(String),
    /// Source split into lines, each carrying its own line break.
    Lines(Vec<String>),
}

impl CellSource {
    /// The source as a single string. Line items are concatenated as-is.
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            CellSource::Text(text) => text.clone(),
            CellSource::Lines(lines) => lines.concat(),
        }
    }
}

impl Cell {
    /// The cell's source text, empty when there is none.
    #[must_use]
    pub fn text(&self) -> String {
        self.source
            .as_ref()
            .map(CellSource::joined)
            .unwrap_or_default()
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotebookMetadata {
    /// Kernel the notebook was written for.
    #[serde(default)]
    pub kernelspec: Option<KernelSpec>,
    /// Language the kernel runs.
    #[serde(default)]
    pub language_info: Option<LanguageInfo>,
}

/// The `kernelspec` metadata entry.
#[derive(Debug, Clone, Deserialize)]
pub struct KernelSpec {
    /// Name shown in the notebook UI, e.g. `Python 3`.
    #[serde(default)]
    pub display_name: String,
    /// Kernel language; older notebooks only record it here.
    #[serde(default)]
    pub language: Option<String>,
    /// Installed kernel name, e.g. `python3`.
    #[serde(default)]
    pub name: String,
}

/// The `language_info` metadata entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageInfo {
    /// Language name, e.g. `python`.
    pub name: String,
    /// Language version, when the kernel reported one.
    #[serde(default)]
    pub version: Option<String>,
}

impl Notebook {
    /// Parse a notebook from JSON text.
    ///
    /// # Errors
    ///
    /// [`NotebookError::Json`] when the text is not a notebook.
    pub fn from_json_str(json: &str) -> Result<Self, NotebookError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a notebook from a reader.
    ///
    /// # Errors
    ///
    /// [`NotebookError::Json`] on malformed input, [`NotebookError::Io`] when
    /// reading fails.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, NotebookError> {
        let json = io::read_to_string(reader)?;
        Self::from_json_str(&json)
    }

    /// Read and parse a notebook file.
    ///
    /// # Errors
    ///
    /// [`NotebookError::Io`] when the file cannot be opened,
    /// [`NotebookError::Json`] when it is not a notebook.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NotebookError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Name of the notebook's language, from `language_info` or else the
    /// kernel spec.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        let meta = &self.metadata;
        meta.language_info
            .as_ref()
            .map(|info| info.name.as_str())
            .or_else(|| meta.kernelspec.as_ref()?.language.as_deref())
    }

    /// The cells as `(kind, text)` blocks in document order.
    pub fn blocks(&self) -> impl Iterator<Item = SourceBlock> + '_ {
        self.cells
            .iter()
            .map(|cell| SourceBlock::new(cell.cell_type, cell.text()))
    }
}
