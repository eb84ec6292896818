//! The `scan` use case: invoke the scanner, post-process, persist, report.

use crate::report::{runtime_error_report, tool_meta};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use dockguard_domain::model::ScanModel;
use dockguard_domain::stderr;
use dockguard_scan::{build_invocation, save_report, ScannerRunner};
use dockguard_settings::{Overrides, ResolvedConfig};
use dockguard_types::{
    ids, OutputFormat, ScanReport, TargetKind, TargetName, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Input for the scan use case.
pub struct ScanInput<'a> {
    /// Dockerfile path or image reference.
    pub target: &'a str,
    pub kind: TargetKind,
    pub format: OutputFormat,

    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,

    /// Raw Dockerfile text, for Dockerfile targets.
    pub dockerfile: Option<String>,

    /// HTML template location used by [`OutputFormat::Html`].
    pub template_path: &'a Utf8Path,

    /// The scanner capability; swap in a canned runner for tests.
    pub runner: &'a dyn ScannerRunner,
}

/// Output from the scan use case.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    pub report: ScanReport,
    pub resolved: ResolvedConfig,

    /// Path of the persisted raw scanner output, for structured formats.
    pub report_path: Option<Utf8PathBuf>,

    /// Raw scanner stdout, for non-quiet relay.
    pub stdout: String,
    /// Scanner stderr lines at or above the configured level.
    pub stderr_lines: Vec<String>,

    /// Exit status of the scanner subprocess (1 when it never ran).
    pub scanner_exit_code: i32,
}

/// Run one scan end to end.
///
/// Conditions that prevent the scanner from producing output (missing
/// template, spawn failure) yield an `Ok` output with a failure report, not
/// an `Err`: the caller always has something to render and an exit code to
/// derive. `Err` is reserved for dockguard's own IO going wrong.
pub fn run_scan(input: ScanInput<'_>) -> anyhow::Result<ScanOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        dockguard_settings::DockguardConfigV1::default()
    } else {
        dockguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        dockguard_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    let invocation =
        match build_invocation(input.target, input.kind, input.format, input.template_path) {
            Ok(invocation) => invocation,
            Err(err) => {
                return Ok(failure_output(
                    &input,
                    resolved,
                    ids::CODE_TEMPLATE_MISSING,
                    &format!("{err:#}"),
                ));
            }
        };

    let raw = match input.runner.run(&invocation) {
        Ok(raw) => raw,
        Err(err) => {
            return Ok(failure_output(
                &input,
                resolved,
                ids::CODE_SCANNER_FAILED,
                &format!("error running scanner command: {err:#}"),
            ));
        }
    };

    let report_path = if input.format.is_persisted() {
        let path = save_report(
            &resolved.reports_dir,
            &raw.stdout,
            &TargetName::new(input.target),
            input.format,
        )
        .context("save raw report")?;
        Some(path)
    } else {
        None
    };

    let model = ScanModel {
        target: input.target.to_string(),
        kind: input.kind,
        format: input.format,
        stdout: raw.stdout.clone(),
        dockerfile: input.dockerfile.clone(),
    };

    let domain_report = dockguard_domain::evaluate(&model, &resolved.effective);
    let finished_at = OffsetDateTime::now_utc();

    let mut data = domain_report.data;
    data.report_path = report_path.as_ref().map(|p| p.to_string());

    let report = ScanReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data,
    };

    let stderr_lines = stderr::filter_stderr(&raw.stderr, resolved.effective.min_log_level);

    Ok(ScanOutput {
        report,
        resolved,
        report_path,
        stdout: raw.stdout,
        stderr_lines,
        scanner_exit_code: raw.exit_code,
    })
}

fn failure_output(
    input: &ScanInput<'_>,
    resolved: ResolvedConfig,
    code: &str,
    message: &str,
) -> ScanOutput {
    ScanOutput {
        report: runtime_error_report(input.target, input.kind, input.format, code, message),
        resolved,
        report_path: None,
        stdout: String::new(),
        stderr_lines: Vec::new(),
        scanner_exit_code: 1,
    }
}
