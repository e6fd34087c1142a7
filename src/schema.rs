//! Column schema: the fixed, ordered list of column names a line is
//! projected onto.
//!
//! Column names are JSON paths as produced by [`crate::flatten`], e.g.
//! `request.url` or `items[0].id`. Matching is exact string equality.

use crate::error::JcolError;

/// Columns of the default API log schema, in output order.
pub const API_COLUMNS: &[&str] = &[
    "@timestamp",
    "api",
    "request.url",
    "response.body",
    "request.body",
    "context.siteurl",
    "operationName",
];

/// Ordered, immutable list of column names.
///
/// Duplicate names are allowed; each duplicate resolves to the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    names: Vec<String>,
}

impl ColumnSchema {
    /// Build a schema from column names.
    ///
    /// Fails when `names` is empty, since the raw fallback needs a last column.
    pub fn new<I, S>(names: I) -> Result<Self, JcolError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(JcolError::Config(
                "column schema must contain at least one column".to_string(),
            ));
        }
        Ok(Self { names })
    }

    /// The default API schema ([`API_COLUMNS`]).
    pub fn api() -> Self {
        Self {
            names: API_COLUMNS.iter().map(|&s| s.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Index of the first column with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::api()
    }
}
