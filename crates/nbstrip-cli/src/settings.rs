//! Layered configuration for the `nbstrip` binary.
//!
//! The binary carries `defaults/nbstrip.default.toml` inside it. [`Loader`]
//! stacks an optional `--config` file and the extraction flags over it and
//! reads the result into [`NbstripConfig`].

use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use nbstrip::{OutputFormat, ProcessOptions, StripOptions};
use serde::Deserialize;

const DEFAULT_TOML: &str = include_str!("../defaults/nbstrip.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NbstripConfig {
    pub extract: ExtractConfig,
    pub output: OutputConfig,
}

/// Which cells and comments survive extraction.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExtractConfig {
    pub keep_only_code: bool,
    pub strip_comments: bool,
    pub line_comments: bool,
    pub block_strings: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl NbstripConfig {
    pub fn process_options(&self) -> ProcessOptions {
        ProcessOptions {
            keep_only_code: self.extract.keep_only_code,
            strip_comments: self.extract.strip_comments,
            strip: StripOptions {
                line_comments: self.extract.line_comments,
                block_strings: self.extract.block_strings,
            },
            format: self.output.format,
        }
    }
}

/// Builds an [`NbstripConfig`] from the embedded defaults, an optional
/// `--config` file and command-line flags, later layers winning.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the embedded `nbstrip.default.toml` so far.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file on top of what is already layered. The file must exist.
    pub fn layer_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Pin a dotted key such as `extract.keep_only_code` to the value a flag
    /// asked for.
    pub fn flag<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and read them into an [`NbstripConfig`].
    pub fn build(self) -> Result<NbstripConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
