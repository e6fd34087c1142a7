//! `jcol` — Project JSON log lines onto a fixed set of named columns.
//!
//! Each line is decoded as a JSON object, flattened into leaf paths
//! (`request.url`, `items[0].id`) and projected onto an ordered
//! [`ColumnSchema`]. Fields missing from a line become empty columns. Lines
//! that are not JSON objects are never an error: they produce a record with
//! the raw text in the last column, so every line yields exactly
//! [`Columnizer::column_count`] values.
//!
//! # Example
//!
//! ```
//! use jcol::{Columnizer, JsonlColumnizer};
//!
//! let columnizer = JsonlColumnizer::api();
//!
//! let record = columnizer.split_line(r#"{"api":"orders","context":{"siteurl":"http://x"}}"#);
//! assert_eq!(record.column(1), Some("orders"));
//! assert_eq!(record.column(5), Some("http://x"));
//!
//! let raw = columnizer.split_line("not json at all");
//! assert_eq!(raw.columns().last().map(String::as_str), Some("not json at all"));
//! ```

pub mod cli;
pub mod columnizer;
pub mod config;
pub mod decoder;
pub mod error;
pub mod flatten;
pub mod line;
pub mod output;
pub mod projector;
pub mod schema;

// Re-export primary API types for convenience.
pub use columnizer::{Columnizer, JsonlColumnizer, Priority};
pub use config::Config;
pub use error::JcolError;
pub use flatten::{FlatField, NullRendering, flatten};
pub use line::{ColumnizedLine, LineKind, LogLine, NumberedLine};
pub use schema::ColumnSchema;
