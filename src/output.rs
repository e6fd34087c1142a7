//! Row rendering for the `jcol` CLI.
//!
//! Formats a [`ColumnizedLine`] as one output line:
//! - `tsv`: tab-separated, with `\t`, `\n`, `\r` and `\\` escaped
//! - `table`: ` | `-separated, cells truncated at the max field length
//! - `json`: a JSON object keyed by column name, in column order

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::line::{ColumnizedLine, LogLine};

const TABLE_SEPARATOR: &str = " | ";

/// Format the header row into `out`. JSON output has no header.
pub fn format_header(names: &[String], config: &Config, use_color: bool, out: &mut String) {
    let separator = match config.format {
        OutputFormat::Json => return,
        OutputFormat::Tsv => "\t",
        OutputFormat::Table => TABLE_SEPARATOR,
    };

    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        let cell = match config.format {
            OutputFormat::Table => truncate_value(name, config.max_field_length),
            _ => escape_tsv(name),
        };
        if use_color {
            let _ = write!(out, "{}", cell.bold());
        } else {
            out.push_str(&cell);
        }
    }
}

/// Format one columnized line into `out`.
pub fn format_row<L: LogLine + ?Sized>(
    record: &ColumnizedLine<'_, L>,
    names: &[String],
    config: &Config,
    out: &mut String,
) {
    match config.format {
        OutputFormat::Tsv => {
            for (i, value) in record.columns().iter().enumerate() {
                if i > 0 {
                    out.push('\t');
                }
                out.push_str(&escape_tsv(value));
            }
        }
        OutputFormat::Table => {
            for (i, value) in record.columns().iter().enumerate() {
                if i > 0 {
                    out.push_str(TABLE_SEPARATOR);
                }
                let flat = value.replace(['\n', '\r'], " ");
                out.push_str(&truncate_value(&flat, config.max_field_length));
            }
        }
        OutputFormat::Json => {
            let mut map = serde_json::Map::with_capacity(names.len());
            for (name, value) in names.iter().zip(record.columns()) {
                map.entry(name.clone())
                    .or_insert_with(|| serde_json::Value::String(value.clone()));
            }
            out.push_str(&serde_json::Value::Object(map).to_string());
        }
    }
}

fn escape_tsv(s: &str) -> String {
    if !s.contains(['\t', '\n', '\r', '\\']) {
        return s.to_string();
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\\' => escaped.push_str("\\\\"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Truncate a value string to `max_len` characters, appending `…` if truncated.
///
/// If `max_len` is `0`, no truncation is applied.
fn truncate_value(s: &str, max_len: usize) -> String {
    if max_len == 0 || s.chars().count() <= max_len {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max_len).collect();
    format!("{truncated}…")
}
