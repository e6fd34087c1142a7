//! Tolerant JSON decoder.
//!
//! Log files are read unattended and may contain anything: partial writes,
//! binary garbage, plain text. [`decode`] never fails; it either yields a
//! JSON object or `None`.

use serde_json::{Map, Value};
use thiserror::Error;

/// Why a line did not decode to a JSON object.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not valid JSON (syntax error, trailing content, empty).
    #[error("not JSON: {0}")]
    NotJson(#[from] serde_json::Error),

    /// Valid JSON, but not an object (array or scalar).
    #[error("JSON value is not an object")]
    NotAnObject,
}

/// Parse the full line as a JSON object, reporting why it failed.
pub fn try_decode(line: &str) -> Result<Map<String, Value>, DecodeError> {
    match serde_json::from_str::<Value>(line)? {
        Value::Object(map) => Ok(map),
        _ => Err(DecodeError::NotAnObject),
    }
}

/// Parse the full line as a JSON object, mapping every failure to `None`.
pub fn decode(line: &str) -> Option<Map<String, Value>> {
    try_decode(line).ok()
}
