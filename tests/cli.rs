//! CLI behavior tests: exit codes, output location, config, diagnostics.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ESLINT_JSON: &str = r#"[{"filePath":"/a/b.ts","messages":[{"ruleId":"no-any","severity":2,"message":"bad","line":3,"column":5}]}]"#;

fn lintreport_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lintreport"));
    cmd.current_dir(dir.path());
    cmd
}

fn workspace_with_input(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("jsonOutput.json"), content).unwrap();
    dir
}

#[test]
fn defaults_write_report_to_ng_lint_report() {
    let dir = workspace_with_input(ESLINT_JSON);
    lintreport_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report written to"));

    let report = fs::read_to_string(dir.path().join("ng-lint-report").join("report.html")).unwrap();
    assert!(report.contains("Total Issues: 1"));
    assert!(report.contains("b.ts"));
    assert!(!report.contains("##placeholder##"));
}

#[test]
fn short_flags_select_input_and_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("eslint.json"), ESLINT_JSON).unwrap();
    lintreport_cmd(&dir)
        .args(["-f", "eslint.json", "-o", "build/reports/lint", "-n", "index.html"])
        .assert()
        .success();
    assert!(dir.path().join("build/reports/lint/index.html").exists());
}

#[test]
fn missing_input_file_exit_1() {
    let dir = TempDir::new().unwrap();
    lintreport_cmd(&dir)
        .args(["--jsonfile", "nope.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read lint output").and(predicate::str::contains("nope.json")));
    assert!(!dir.path().join("ng-lint-report").exists());
}

#[test]
fn empty_input_option_exit_1() {
    let dir = TempDir::new().unwrap();
    lintreport_cmd(&dir)
        .args(["--jsonfile", ""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Please provide a valid JSON path"));
}

#[test]
fn malformed_json_writes_empty_report() {
    let dir = workspace_with_input("{{ this is not json");
    lintreport_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"));
    let report = fs::read_to_string(dir.path().join("ng-lint-report/report.html")).unwrap();
    assert!(report.contains("No errors!"));
    assert!(report.contains("Total Issues: 0"));
}

#[test]
fn malformed_json_strict_exit_1() {
    let dir = workspace_with_input("{{ this is not json");
    lintreport_cmd(&dir)
        .arg("--strict")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid JSON"));
    assert!(!dir.path().join("ng-lint-report").exists());
}

#[test]
fn non_array_json_exit_1() {
    let dir = workspace_with_input(r#"{"filePath": "/a/b.ts", "messages": []}"#);
    lintreport_cmd(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("JSON format is not valid"));
    assert!(!dir.path().join("ng-lint-report").exists());
}

#[test]
fn output_blocked_by_file_exit_1() {
    let dir = workspace_with_input(ESLINT_JSON);
    fs::write(dir.path().join("ng-lint-report"), "not a directory").unwrap();
    lintreport_cmd(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to write report"));
}

#[test]
fn config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("lint")).unwrap();
    fs::write(dir.path().join("lint/out.json"), ESLINT_JSON).unwrap();
    fs::write(
        dir.path().join(".lintreportrc.json"),
        r#"{ "jsonfile": "lint/out.json", "output": "site", "filename": "lint.html" }"#,
    )
    .unwrap();

    lintreport_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Using config"));
    assert!(dir.path().join("site/lint.html").exists());
}

#[test]
fn custom_template_without_placeholder_is_copied() {
    let dir = workspace_with_input(ESLINT_JSON);
    let template = "<html><body>static</body></html>";
    fs::write(dir.path().join("page.html"), template).unwrap();
    lintreport_cmd(&dir)
        .args(["--template", "page.html"])
        .assert()
        .success();
    let report = fs::read_to_string(dir.path().join("ng-lint-report/report.html")).unwrap();
    assert_eq!(report, template);
}

#[test]
fn missing_template_exit_1() {
    let dir = workspace_with_input(ESLINT_JSON);
    lintreport_cmd(&dir)
        .args(["--template", "absent.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read template"));
}

#[test]
fn quiet_mode_prints_nothing_on_success() {
    let dir = workspace_with_input("not json");
    lintreport_cmd(&dir)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn help_lists_options() {
    let dir = TempDir::new().unwrap();
    lintreport_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--jsonfile")
                .and(predicate::str::contains("--output"))
                .and(predicate::str::contains("--filename")),
        );
}
