//! Projection of flattened fields onto a [`ColumnSchema`], and the raw-line
//! fallback.
//!
//! Both paths return exactly `schema.len()` values.

use crate::flatten::FlatField;
use crate::schema::ColumnSchema;

/// Resolve each schema column against `fields` by exact path match.
///
/// The first field with a matching path wins; columns with no match are
/// empty. Missing fields are the common case, not an error.
pub fn project(schema: &ColumnSchema, fields: &[FlatField]) -> Vec<String> {
    schema
        .names()
        .iter()
        .map(|name| {
            fields
                .iter()
                .find(|f| f.path == *name)
                .map(|f| f.value.clone())
                .unwrap_or_default()
        })
        .collect()
}

/// Record for a line that is not a JSON object: `raw` in the last column,
/// empty strings elsewhere.
pub fn fallback(schema: &ColumnSchema, raw: &str) -> Vec<String> {
    let mut columns = vec![String::new(); schema.len()];
    if let Some(last) = columns.last_mut() {
        raw.clone_into(last);
    }
    columns
}
