use assert_cmd::Command;

/// Helper to get a Command for the dockguard binary.
#[allow(deprecated)]
fn dockguard_cmd() -> Command {
    Command::cargo_bin("dockguard").unwrap()
}

#[test]
fn help_works() {
    dockguard_cmd().arg("--help").assert().success();
}

#[test]
fn scan_help_lists_fail_fast_flags() {
    let output = dockguard_cmd()
        .args(["scan", "--help"])
        .output()
        .expect("run scan --help");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--fail-on-secrets"));
    assert!(stdout.contains("--fail-on-high"));
    assert!(stdout.contains("--fail-on-licenses"));
}
