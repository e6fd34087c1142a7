//! Command-line argument definitions for `jcol`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::flatten::NullRendering;

/// Project JSON log lines onto a fixed set of named columns.
///
/// Reads lines from FILES (or stdin), decodes each as a JSON object and
/// prints one row per line. Lines that are not JSON objects keep their raw
/// text in the last column.
#[derive(Debug, Parser)]
#[command(name = "jcol", version, about, long_about = None)]
pub struct Cli {
    /// Input files; `-` or no files reads stdin.
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Column names (JSON paths, comma-separated). Overrides the config file.
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// How JSON `null` values are shown.
    #[arg(long, value_enum)]
    pub null: Option<NullRendering>,

    /// Print a header row with the column names.
    #[arg(long, overrides_with = "no_header")]
    pub header: bool,

    /// Do not print a header row.
    #[arg(long, overrides_with = "header")]
    pub no_header: bool,

    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Maximum character length for table cells.
    ///
    /// Values exceeding this length are truncated with `…`.
    /// Set to `0` to disable truncation.
    #[arg(short = 'M', long)]
    pub max_field_length: Option<usize>,

    /// Print the priority of this scheme for each FILE and exit.
    #[arg(long, requires = "files")]
    pub priority: bool,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log diagnostics (files opened, lines that fell back to raw) to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Header flag from the CLI, if given either way.
    pub fn header_flag(&self) -> Option<bool> {
        if self.header {
            Some(true)
        } else if self.no_header {
            Some(false)
        } else {
            None
        }
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

/// Row output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated values; tabs and newlines inside values are escaped.
    Tsv,
    /// Columns separated by ` | `, cells truncated to the max field length.
    Table,
    /// One JSON object per line, keyed by column name.
    Json,
}
