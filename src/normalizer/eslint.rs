//! ESLint `--format json` output
//!
//! Each entry describes one file: `{ filePath, messages: [{ ruleId, severity,
//! message, line, column }] }`.

use super::{basename, position, text_of};
use crate::{GroupedReport, IssueRecord};
use serde_json::Value;

/// Map an ESLint numeric severity to its report label.
///
/// `1` and `2` are the only values ESLint defines; anything else is passed
/// through in its JSON text form.
pub fn severity_label(value: Option<&Value>) -> String {
    match value.and_then(Value::as_u64) {
        Some(1) => "WARNING".to_string(),
        Some(2) => "ERROR".to_string(),
        _ => text_of(value),
    }
}

/// Push every message into `report`; returns the summed message count.
pub(super) fn collect(entries: &[Value], report: &mut GroupedReport) -> usize {
    let mut total = 0;
    for entry in entries {
        let Some(messages) = entry.get("messages").and_then(Value::as_array) else {
            continue;
        };
        total += messages.len();

        let path = text_of(entry.get("filePath"));
        let file_name = basename(&path);
        for msg in messages {
            report.push(
                file_name,
                IssueRecord {
                    path: path.clone(),
                    rule: text_of(msg.get("ruleId")),
                    severity: severity_label(msg.get("severity")),
                    message: text_of(msg.get("message")),
                    position: position(msg.get("line"), msg.get("column")),
                },
            );
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_severity_table() {
        assert_eq!(severity_label(Some(&json!(1))), "WARNING");
        assert_eq!(severity_label(Some(&json!(2))), "ERROR");
    }

    #[test]
    fn test_unknown_severity_passes_through() {
        assert_eq!(severity_label(Some(&json!(0))), "0");
        assert_eq!(severity_label(Some(&json!(3))), "3");
        assert_eq!(severity_label(Some(&json!("warn"))), "warn");
        assert_eq!(severity_label(Some(&json!(2.5))), "2.5");
        assert_eq!(severity_label(None), "");
    }

    #[test]
    fn test_messages_missing_or_not_array_count_zero() {
        let entries = json!([
            {"filePath": "/a.ts"},
            {"filePath": "/b.ts", "messages": "nope"},
            {"filePath": "/c.ts", "messages": null},
            {"filePath": "/d.ts", "messages": []}
        ]);
        let mut report = GroupedReport::new();
        let total = collect(entries.as_array().unwrap(), &mut report);
        assert_eq!(total, 0);
        assert!(report.is_empty());
    }

    #[test]
    fn test_same_basename_merges_across_entries() {
        let entries = json!([
            {"filePath": "/app/one/index.ts", "messages": [{"ruleId": "a", "severity": 1, "message": "m1", "line": 1, "column": 1}]},
            {"filePath": "/app/two.ts", "messages": [{"ruleId": "b", "severity": 2, "message": "m2", "line": 2, "column": 2}]},
            {"filePath": "/app/two/index.ts", "messages": [{"ruleId": "c", "severity": 2, "message": "m3", "line": 3, "column": 3}]}
        ]);
        let mut report = GroupedReport::new();
        let total = collect(entries.as_array().unwrap(), &mut report);
        assert_eq!(total, 3);

        let names: Vec<&str> = report.groups().iter().map(|g| g.file_name.as_str()).collect();
        assert_eq!(names, vec!["index.ts", "two.ts"]);
        let index = report.get("index.ts").unwrap();
        assert_eq!(index.issues[0].path, "/app/one/index.ts");
        assert_eq!(index.issues[1].path, "/app/two/index.ts");
        assert_eq!(index.issues[1].rule, "c");
    }

    #[test]
    fn test_null_rule_and_missing_position() {
        let entries = json!([
            {"filePath": "/p.ts", "messages": [{"ruleId": null, "severity": 2, "message": "Parsing error: Unexpected token"}]}
        ]);
        let mut report = GroupedReport::new();
        collect(entries.as_array().unwrap(), &mut report);
        let issue = &report.get("p.ts").unwrap().issues[0];
        assert_eq!(issue.rule, "");
        assert_eq!(issue.position, "Line:  Col: ");
        assert_eq!(issue.message, "Parsing error: Unexpected token");
    }
}
