use anyhow::Context;
use dockguard_domain::history::SizeBreakdown;
use dockguard_render::{
    RenderableData, RenderableFinding, RenderableLayer, RenderableLocation, RenderableReport,
    RenderableSeverity, RenderableSizeBreakdown, RenderableVerdictStatus,
};
use dockguard_types::{
    ids, Finding, OutputFormat, ScanData, ScanReport, Severity, TargetKind, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "dockguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// A well-formed failure report for conditions that prevent a scan from
/// producing findings at all: missing template, scanner spawn failure,
/// unreadable input.
pub fn runtime_error_report(
    target: &str,
    kind: TargetKind,
    format: OutputFormat,
    code: &str,
    message: &str,
) -> ScanReport {
    let now = OffsetDateTime::now_utc();
    ScanReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: code.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run dockguard.".to_string()),
            data: serde_json::Value::Null,
        }],
        data: ScanData {
            target: target.to_string(),
            target_kind: kind,
            format,
            report_path: None,
            secrets_detected: false,
            findings_total: 1,
            findings_emitted: 1,
            truncated_reason: None,
        },
    }
}

pub fn serialize_report(report: &ScanReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ScanReport> {
    let report: ScanReport = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

pub fn to_renderable(report: &ScanReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            target: report.data.target.clone(),
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            secrets_detected: report.data.secrets_detected,
            report_path: report.data.report_path.clone(),
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            target: loc.target.clone(),
            line: loc.line,
        }),
        help: f.help.clone(),
    }
}

pub fn size_to_renderable(breakdown: &SizeBreakdown) -> RenderableSizeBreakdown {
    RenderableSizeBreakdown {
        layers: breakdown
            .layers
            .iter()
            .map(|l| RenderableLayer {
                size: l.size.clone(),
                created_by: l.created_by.clone(),
            })
            .collect(),
        total_bytes: breakdown.total_bytes,
    }
}

/// Map verdict to exit code: 0 = pass/warn, 1 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 1,
    }
}
