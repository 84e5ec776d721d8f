//! lintreport: HTML reports for ESLint and TSLint JSON output
//!
//! This library normalizes the JSON emitted by a lint tool into one record
//! shape, groups the records by source file and renders them into a static
//! HTML page.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod output;
pub mod reporter;

pub use error::{ReportError, Result};

use serde::Serialize;
use std::collections::HashMap;

/// A single lint finding in the normalized shape shared by every source format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    /// Full path of the offending file, as reported by the linter
    pub path: String,
    /// Rule identifier (empty when the linter reported none)
    pub rule: String,
    /// `WARNING`, `ERROR`, or whatever label the linter used
    pub severity: String,
    /// Human-readable failure text
    pub message: String,
    /// Display position, e.g. `Line: 3 Col: 5`
    pub position: String,
}

/// All issues reported for one base file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileGroup {
    pub file_name: String,
    pub issues: Vec<IssueRecord>,
}

/// Issues grouped by base file name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedReport {
    groups: Vec<FileGroup>,
    index: HashMap<String, usize>,
}

impl GroupedReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the group for `file_name`, creating the group on first sight.
    pub fn push(&mut self, file_name: &str, record: IssueRecord) {
        let slot = match self.index.get(file_name) {
            Some(&slot) => slot,
            None => {
                self.groups.push(FileGroup {
                    file_name: file_name.to_string(),
                    issues: Vec::new(),
                });
                self.index.insert(file_name.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[slot].issues.push(record);
    }

    pub fn groups(&self) -> &[FileGroup] {
        &self.groups
    }

    pub fn get(&self, file_name: &str) -> Option<&FileGroup> {
        self.index.get(file_name).map(|&slot| &self.groups[slot])
    }

    /// Number of file groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all groups
    pub fn issue_count(&self) -> usize {
        self.groups.iter().map(|g| g.issues.len()).sum()
    }
}

/// Which of the two known lint JSON layouts an input used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceShape {
    /// One entry per file with a nested `messages` array
    Eslint,
    /// One entry per issue (TSLint and similar)
    Generic,
}

impl std::fmt::Display for SourceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceShape::Eslint => write!(f, "eslint"),
            SourceShape::Generic => write!(f, "generic"),
        }
    }
}

/// Totals shown in the report header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// ESLint: sum of message counts. Generic: number of top-level entries.
    pub total_issues: usize,
    pub shape: SourceShape,
}

/// What to do with lint output that is not valid JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonPolicy {
    /// Treat unparsable text as an empty result set
    #[default]
    Lenient,
    /// Fail with [`ReportError::MalformedJson`]
    Strict,
}

/// Output of [`build_report`]
#[derive(Debug, Clone)]
pub struct BuiltReport {
    pub html: String,
    pub summary: Summary,
    /// Number of file groups rendered
    pub files: usize,
    /// Set when lenient parsing discarded unparsable input
    pub recovered_from: Option<String>,
}

/// Parse, normalize and render raw lint output in one step.
///
/// * `input` - raw text of the lint tool's JSON output
/// * `template` - HTML template containing [`reporter::PLACEHOLDER`]
/// * `policy` - how malformed JSON is handled
pub fn build_report(input: &str, template: &str, policy: JsonPolicy) -> Result<BuiltReport> {
    let parsed = normalizer::parse_input(input, policy)?;
    let (report, summary) = normalizer::normalize(&parsed.value)?;
    let html = reporter::render(template, &report, &summary);
    Ok(BuiltReport {
        html,
        summary,
        files: report.len(),
        recovered_from: parsed.recovered_from,
    })
}
