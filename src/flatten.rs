//! Flattening of a JSON document into `(path, value)` leaf pairs.
//!
//! Paths use the conventional JSON-path addressing:
//! - object keys are joined with `.` (`request.body`)
//! - array elements use `[n]` (`items[0].id`)
//! - keys that would be ambiguous in dotted form use `['key']`
//!   (`headers.content-type` stays dotted, `a['b.c']` does not)
//!
//! Traversal is depth-first in document order, so output is deterministic.
//! Numbers keep the digits written in the source line.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;

/// Path reported for a bare scalar document.
pub const ROOT_PATH: &str = "$";

/// How a JSON `null` leaf is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullRendering {
    /// Empty string, indistinguishable from a missing field.
    #[default]
    Empty,
    /// The literal text `null`.
    Literal,
}

/// One leaf of a flattened document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatField {
    pub path: String,
    pub value: String,
}

/// Enumerate every leaf of `doc` with its full path.
///
/// Leaves are scalars and containers without children (`{}`, `[]`).
/// The root container itself is never reported.
pub fn flatten(doc: &Value, nulls: NullRendering) -> Vec<FlatField> {
    let mut out = Vec::new();
    match doc {
        Value::Object(_) | Value::Array(_) => {
            let mut path = String::new();
            walk_children(doc, &mut path, nulls, &mut out);
        }
        scalar => out.push(FlatField {
            path: ROOT_PATH.to_string(),
            value: render_value(scalar, nulls),
        }),
    }
    out
}

fn walk_children(node: &Value, path: &mut String, nulls: NullRendering, out: &mut Vec<FlatField>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let len = path.len();
                push_key(path, key);
                walk(child, path, nulls, out);
                path.truncate(len);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let len = path.len();
                let _ = write!(path, "[{index}]");
                walk(child, path, nulls, out);
                path.truncate(len);
            }
        }
        _ => {}
    }
}

fn walk(node: &Value, path: &mut String, nulls: NullRendering, out: &mut Vec<FlatField>) {
    let has_children = match node {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    };

    if has_children {
        walk_children(node, path, nulls, out);
    } else {
        out.push(FlatField {
            path: path.clone(),
            value: render_value(node, nulls),
        });
    }
}

/// Append an object key to `path`, dotted when possible, bracketed otherwise.
fn push_key(path: &mut String, key: &str) {
    if needs_brackets(key) {
        path.push_str("['");
        for c in key.chars() {
            match c {
                '\'' => path.push_str("\\'"),
                '\\' => path.push_str("\\\\"),
                '\n' => path.push_str("\\n"),
                '\r' => path.push_str("\\r"),
                '\t' => path.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(path, "\\u{:04x}", c as u32);
                }
                c => path.push(c),
            }
        }
        path.push_str("']");
    } else {
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(key);
    }
}

fn needs_brackets(key: &str) -> bool {
    key.is_empty()
        || key.chars().any(|c| {
            matches!(
                c,
                '.' | ' ' | '\'' | '"' | '/' | '[' | ']' | '(' | ')' | '\\'
            ) || c.is_control()
                || c == '\u{2028}'
                || c == '\u{2029}'
        })
}

/// Render a leaf value as display text.
///
/// Strings are unquoted; numbers and booleans use their JSON text;
/// empty containers render as `{}` / `[]`.
pub fn render_value(value: &Value, nulls: NullRendering) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => match nulls {
            NullRendering::Empty => String::new(),
            NullRendering::Literal => "null".to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
