//! TSLint-style output: one entry per issue
//!
//! `{ name, ruleName, ruleSeverity, failure, startPosition: { line, character },
//! endPosition: { line, character } }`

use super::{basename, position, text_of};
use crate::{GroupedReport, IssueRecord};
use serde_json::Value;

/// Push one record per entry into `report`; returns the entry count.
pub(super) fn collect(entries: &[Value], report: &mut GroupedReport) -> usize {
    for entry in entries {
        let path = text_of(entry.get("name"));
        // The position pairs the END line with the START column.
        let line = entry.get("endPosition").and_then(|p| p.get("line"));
        let column = entry.get("startPosition").and_then(|p| p.get("character"));
        let record = IssueRecord {
            rule: text_of(entry.get("ruleName")),
            severity: text_of(entry.get("ruleSeverity")),
            message: text_of(entry.get("failure")),
            position: position(line, column),
            path: path.clone(),
        };
        report.push(basename(&path), record);
    }
    entries.len()
}
