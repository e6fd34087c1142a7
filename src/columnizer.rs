//! The column scheme contract and its JSON Lines implementation.
//!
//! A host (log viewer, CLI, pipeline) holds one or more [`Columnizer`]s,
//! uses [`Columnizer::priority`] to pick one for a file, then calls
//! [`Columnizer::split_line`] for every line. The trait is dyn-compatible:
//! a host holding `Box<dyn Columnizer>` calls [`Columnizer::split_text`].

use std::path::Path;
use std::time::SystemTime;

use crate::decoder;
use crate::error::JcolError;
use crate::flatten::{self, NullRendering};
use crate::line::{ColumnizedLine, LineKind, LogLine};
use crate::projector;
use crate::schema::ColumnSchema;

/// How well a column scheme fits a given file.
///
/// Ordered so that the best candidate compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    NotSupport,
    WellSupport,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NotSupport => "not-supported",
            Self::WellSupport => "well-supported",
        })
    }
}

/// Capability contract between a column scheme and its host.
///
/// Timeshift and value push-back are optional capabilities; the default
/// methods report them as unsupported. Hosts must check
/// [`is_timeshift_implemented`](Self::is_timeshift_implemented) first.
pub trait Columnizer {
    /// Human-readable name of the scheme.
    fn name(&self) -> &str;

    /// Explanatory text, including credits for libraries used.
    fn description(&self) -> &str;

    fn column_count(&self) -> usize {
        self.column_names().len()
    }

    /// Column names in output order.
    fn column_names(&self) -> &[String];

    /// Resolve the column values for the raw text of one line.
    ///
    /// Returns exactly [`column_count`](Self::column_count) values. Total over
    /// all inputs: never panics, never fails.
    fn split_text(&self, text: &str) -> (LineKind, Vec<String>);

    /// Split one host line, keeping a reference to it in the result.
    ///
    /// Trait objects use [`split_text`](Self::split_text) instead.
    fn split_line<'a, L: LogLine + ?Sized>(&self, line: &'a L) -> ColumnizedLine<'a, L>
    where
        Self: Sized,
    {
        let (kind, columns) = self.split_text(line.full_line());
        ColumnizedLine::new(line, kind, columns)
    }

    /// Applicability of this scheme to `file_name`.
    fn priority(&self, file_name: &str, samples: &[&str]) -> Priority;

    fn is_timeshift_implemented(&self) -> bool {
        false
    }

    fn set_time_offset(&mut self, _msec_offset: i64) -> Result<(), JcolError> {
        Err(JcolError::Unsupported("set_time_offset"))
    }

    fn time_offset(&self) -> Result<i64, JcolError> {
        Err(JcolError::Unsupported("time_offset"))
    }

    fn timestamp(&self, _line: &str) -> Result<SystemTime, JcolError> {
        Err(JcolError::Unsupported("timestamp"))
    }

    fn push_value(
        &mut self,
        _column: usize,
        _value: &str,
        _old_value: &str,
    ) -> Result<(), JcolError> {
        Err(JcolError::Unsupported("push_value"))
    }
}

/// Default scheme name.
pub const DEFAULT_NAME: &str = "Api Json Columnizer";

/// Default file extension reported as [`Priority::WellSupport`].
pub const DEFAULT_EXTENSION: &str = "jsonl";

const DESCRIPTION: &str = "Splits JSON log files into columns.\n\n\
Credits:\nThis columnizer uses the serde_json crate.\n";

/// Column scheme for JSON Lines log files.
///
/// Each line is decoded as a JSON object, flattened to leaf paths and
/// projected onto a fixed [`ColumnSchema`]. Lines that are not JSON objects
/// produce a record with the raw line in the last column.
#[derive(Debug, Clone)]
pub struct JsonlColumnizer {
    name: String,
    schema: ColumnSchema,
    extension: String,
    nulls: NullRendering,
}

impl JsonlColumnizer {
    pub fn new(schema: ColumnSchema) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            schema,
            extension: DEFAULT_EXTENSION.to_string(),
            nulls: NullRendering::default(),
        }
    }

    /// Scheme over the default API columns.
    pub fn api() -> Self {
        Self::new(ColumnSchema::api())
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// File extension (without the dot) this scheme claims.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    #[must_use]
    pub fn with_nulls(mut self, nulls: NullRendering) -> Self {
        self.nulls = nulls;
        self
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }
}

impl Default for JsonlColumnizer {
    fn default() -> Self {
        Self::api()
    }
}

impl Columnizer for JsonlColumnizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn column_names(&self) -> &[String] {
        self.schema.names()
    }

    fn split_text(&self, text: &str) -> (LineKind, Vec<String>) {
        match decoder::decode(text) {
            Some(map) => {
                let doc = serde_json::Value::Object(map);
                let fields = flatten::flatten(&doc, self.nulls);
                (LineKind::Json, projector::project(&self.schema, &fields))
            }
            None => (LineKind::Raw, projector::fallback(&self.schema, text)),
        }
    }

    fn priority(&self, file_name: &str, _samples: &[&str]) -> Priority {
        let matches = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension));
        if matches {
            Priority::WellSupport
        } else {
            Priority::NotSupport
        }
    }
}
