//! Integration tests for the `suggest` command (no external tools needed).

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn dockguard_cmd() -> Command {
    Command::cargo_bin("dockguard").unwrap()
}

#[test]
fn suggests_smaller_python_images() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let dockerfile = tmp.path().join("Dockerfile");
    std::fs::write(&dockerfile, "FROM python:3.10\nRUN pip install .\n").expect("write");

    dockguard_cmd()
        .arg("suggest")
        .arg("--dockerfile")
        .arg(&dockerfile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Base image: python:3.10"))
        .stdout(predicate::str::contains("python:3.10-slim"))
        .stdout(predicate::str::contains("python:3.10-alpine"));
}

#[test]
fn missing_dockerfile_fails_with_message() {
    dockguard_cmd()
        .arg("suggest")
        .arg("--dockerfile")
        .arg("does/not/exist/Dockerfile")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Dockerfile not found"));
}

#[test]
fn dockerfile_without_from_fails() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let dockerfile = tmp.path().join("Dockerfile");
    std::fs::write(&dockerfile, "RUN echo no base image\n").expect("write");

    dockguard_cmd()
        .arg("suggest")
        .arg("--dockerfile")
        .arg(&dockerfile)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no FROM line found"));
}
