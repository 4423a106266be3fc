//! Layered configuration for the command line tool.
//!
//! `defaults/enumchron.default.toml` is embedded into the binary. Callers
//! layer files and overrides on top of it with [`Loader`] before
//! deserializing into [`Settings`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::formats::OutputFormat;

const DEFAULT_TOML: &str = include_str!("../defaults/enumchron.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output: OutputSettings,
    pub input: InputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub pretty: bool,
    pub include_failures: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub skip_blank_lines: bool,
}

/// Builds [`Settings`] from the embedded defaults plus whatever the caller
/// layers on top. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self { builder: Config::builder().add_source(defaults) }
    }

    /// Layer a TOML file given with `--config`. A missing file fails `build`.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), true)
    }

    /// Layer a TOML file that is read only when present, such as `./enumchron.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), false)
    }

    fn layer_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `output.format` from `--format`.
    pub fn set_override(
        mut self,
        key: &str,
        value: impl Into<ValueKind>,
    ) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}
