//! Lint output normalization - map ESLint and TSLint JSON into `IssueRecord`s
//!
//! The shape of an input is decided once, from its first entry: an entry with
//! a `filePath` selects ESLint-shape for the whole array, anything else selects
//! the generic (TSLint-style) shape. Later entries follow that branch even if
//! they look different.

mod eslint;
mod tslint;

pub use eslint::severity_label;

use crate::{GroupedReport, JsonPolicy, ReportError, Result, SourceShape, Summary};
use serde_json::Value;
use std::path::Path;

const PATH_SEPARATORS: &[char] = &['/', '\\'];

/// Decoded lint output plus a note when lenient parsing had to discard it
#[derive(Debug, Clone)]
pub struct ParsedInput {
    pub value: Value,
    /// Parser error message when the text was replaced by an empty array
    pub recovered_from: Option<String>,
}

/// Read lint output text from disk.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ReportError::InputReadFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode raw lint output text.
///
/// Under [`JsonPolicy::Lenient`] text that fails to parse becomes an empty
/// array; under [`JsonPolicy::Strict`] it is a [`ReportError::MalformedJson`].
pub fn parse_input(text: &str, policy: JsonPolicy) -> Result<ParsedInput> {
    let text = text.trim_start_matches('\u{feff}');
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(ParsedInput {
            value,
            recovered_from: None,
        }),
        Err(e) => match policy {
            JsonPolicy::Strict => Err(ReportError::MalformedJson(e)),
            JsonPolicy::Lenient => Ok(ParsedInput {
                value: Value::Array(Vec::new()),
                recovered_from: Some(e.to_string()),
            }),
        },
    }
}

/// Decide the source shape from the first entry.
pub fn detect_shape(entries: &[Value]) -> SourceShape {
    match entries.first().and_then(|e| e.get("filePath")) {
        Some(v) if !v.is_null() => SourceShape::Eslint,
        _ => SourceShape::Generic,
    }
}

/// Convert decoded lint output into grouped records and a summary.
///
/// Fails with [`ReportError::InvalidFormat`] when the top level is not an array.
pub fn normalize(raw: &Value) -> Result<(GroupedReport, Summary)> {
    let entries = raw
        .as_array()
        .ok_or_else(|| ReportError::InvalidFormat(json_kind(raw)))?;

    let shape = detect_shape(entries);
    let mut report = GroupedReport::new();
    let total_issues = match shape {
        SourceShape::Eslint => eslint::collect(entries, &mut report),
        SourceShape::Generic => tslint::collect(entries, &mut report),
    };

    Ok((report, Summary { total_issues, shape }))
}

/// Final path component, treating both `/` and `\` as separators.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(PATH_SEPARATORS);
    trimmed.rsplit(PATH_SEPARATORS).next().unwrap_or(trimmed)
}

/// Display text for a scalar field; missing and null become empty.
pub(crate) fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub(crate) fn position(line: Option<&Value>, column: Option<&Value>) -> String {
    format!("Line: {} Col: {}", text_of(line), text_of(column))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
