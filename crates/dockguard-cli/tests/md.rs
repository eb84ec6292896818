//! Integration tests for rendering Markdown from a saved report envelope.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn dockguard_cmd() -> Command {
    Command::cargo_bin("dockguard").unwrap()
}

const ENVELOPE: &str = r#"{
  "schema": "dockguard.report.v1",
  "tool": { "name": "dockguard", "version": "0.1.0" },
  "started_at": "2025-06-01T12:00:00Z",
  "finished_at": "2025-06-01T12:00:02Z",
  "verdict": "warn",
  "findings": [
    {
      "severity": "warning",
      "check_id": "scan.licenses",
      "code": "risky_license",
      "message": "risky license detected: GPL-3.0",
      "location": { "target": "debian 12" }
    }
  ],
  "data": {
    "target": "nginx:latest",
    "target_kind": "image",
    "format": "json",
    "secrets_detected": false,
    "findings_total": 1,
    "findings_emitted": 1
  }
}"#;

#[test]
fn renders_markdown_from_saved_report() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let report = tmp.path().join("report.json");
    std::fs::write(&report, ENVELOPE).expect("write report");

    dockguard_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dockguard report"))
        .stdout(predicate::str::contains("**WARN**"))
        .stdout(predicate::str::contains("risky_license"));
}

#[test]
fn writes_markdown_to_file_when_output_given() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let report = tmp.path().join("report.json");
    let out = tmp.path().join("nested/summary.md");
    std::fs::write(&report, ENVELOPE).expect("write report");

    dockguard_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let md = std::fs::read_to_string(&out).expect("read markdown");
    assert!(md.contains("`nginx:latest`"));
}

#[test]
fn missing_report_is_an_error() {
    dockguard_cmd()
        .args(["md", "--report", "no/such/report.json"])
        .assert()
        .failure();
}
