use crate::invocation::ScanInvocation;
use anyhow::Context;
use std::process::Command;

/// Captured output of one scanner invocation.
#[derive(Clone, Debug, Default)]
pub struct RawScanOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Narrow capability seam over the external scanner.
///
/// Post-processing only ever sees a `RawScanOutput`, so it can be exercised
/// against canned outputs without a scanner binary present.
pub trait ScannerRunner {
    fn run(&self, invocation: &ScanInvocation) -> anyhow::Result<RawScanOutput>;
}

/// Production runner: spawns the scanner binary and captures its output.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrivyRunner;

impl ScannerRunner for TrivyRunner {
    fn run(&self, invocation: &ScanInvocation) -> anyhow::Result<RawScanOutput> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .with_context(|| format!("spawn {}", invocation.program))?;

        Ok(RawScanOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
