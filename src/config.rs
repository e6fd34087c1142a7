//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/jcol/config.toml` or `$XDG_CONFIG_HOME/jcol/config.toml`)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, ColorMode, OutputFormat};
use crate::columnizer::{DEFAULT_EXTENSION, DEFAULT_NAME, JsonlColumnizer};
use crate::error::JcolError;
use crate::flatten::NullRendering;
use crate::schema::ColumnSchema;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme name reported by [`crate::Columnizer::name`].
    pub name: String,
    /// Output columns, in order.
    pub schema: ColumnSchema,
    /// File extension reported as well supported.
    pub extension: String,
    /// Rendering of JSON `null` leaves.
    pub nulls: NullRendering,
    /// Row output format.
    pub format: OutputFormat,
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Whether to print a header row. Ignored for JSON output.
    pub header: bool,
    /// Maximum character length for table cells. 0 = no limit.
    pub max_field_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            schema: ColumnSchema::api(),
            extension: DEFAULT_EXTENSION.to_string(),
            nulls: NullRendering::Empty,
            format: OutputFormat::Tsv,
            color_mode: ColorMode::Auto,
            header: true,
            max_field_length: 40,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, JcolError> {
        let mut config = Self::default();

        match cli.config {
            // An explicit path must exist.
            Some(ref path) => config.apply_file_config(FileConfig::load(path)?)?,
            None => {
                let path = Self::default_config_path();
                if path.exists() {
                    config.apply_file_config(FileConfig::load(&path)?)?;
                }
            }
        }

        if let Some(ref columns) = cli.columns {
            config.schema = ColumnSchema::new(columns.iter().cloned())?;
        }
        if let Some(format) = cli.format {
            config.format = format;
        }
        if let Some(nulls) = cli.null {
            config.nulls = nulls;
        }
        if let Some(color) = cli.color {
            config.color_mode = color;
        }
        if let Some(header) = cli.header_flag() {
            config.header = header;
        }
        if let Some(max_len) = cli.max_field_length {
            config.max_field_length = max_len;
        }

        Ok(config)
    }

    /// The column scheme described by this configuration.
    pub fn columnizer(&self) -> JsonlColumnizer {
        JsonlColumnizer::new(self.schema.clone())
            .with_name(self.name.clone())
            .with_extension(self.extension.clone())
            .with_nulls(self.nulls)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/jcol/config.toml` or `~/.config/jcol/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("jcol").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("jcol")
                .join("config.toml")
        } else {
            PathBuf::from(".config/jcol/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<(), JcolError> {
        if let Some(columns) = file.columns {
            self.schema = ColumnSchema::new(columns)?;
        }
        if let Some(name) = file.name {
            self.name = name;
        }
        if let Some(extension) = file.extension {
            self.extension = extension;
        }
        if let Some(nulls) = file.null {
            self.nulls = nulls;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(color) = file.color {
            self.color_mode = color;
        }
        if let Some(header) = file.header {
            self.header = header;
        }
        if let Some(max_len) = file.max_field_length {
            self.max_field_length = max_len;
        }
        Ok(())
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    name: Option<String>,
    columns: Option<Vec<String>>,
    extension: Option<String>,
    null: Option<NullRendering>,
    format: Option<OutputFormat>,
    color: Option<ColorMode>,
    header: Option<bool>,
    max_field_length: Option<usize>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, JcolError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JcolError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
