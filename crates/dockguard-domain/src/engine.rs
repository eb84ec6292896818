use crate::checks;
use crate::model::ScanModel;
use crate::policy::EffectiveConfig;
use crate::report::{DomainReport, SeverityCounts};
use crate::trivy;
use dockguard_types::{ids, Finding, OutputFormat, ScanData, Severity, Verdict};

/// Post-process one captured scanner run.
///
/// Never fails: malformed structured output degrades to an error finding and
/// a failing verdict instead of propagating.
pub fn evaluate(model: &ScanModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    match model.format {
        OutputFormat::Json => match trivy::parse_report(&model.stdout) {
            Ok(report) => checks::run_structured(&report, model, cfg, &mut findings),
            Err(err) => findings.push(Finding {
                severity: Severity::Error,
                check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
                code: ids::CODE_UNPARSEABLE_OUTPUT.to_string(),
                message: format!("failed to parse scanner JSON output: {err}"),
                location: None,
                help: Some("Re-run the scan; a partial or interrupted run truncates the document.".to_string()),
                data: serde_json::Value::Null,
            }),
        },
        OutputFormat::Table => checks::run_fallback(model, cfg, &mut findings),
        // Templated output is opaque; it is persisted, not parsed.
        OutputFormat::Html => {}
    }

    checks::run_dockerfile(model, &mut findings);

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;
    let secrets_detected = findings
        .iter()
        .any(|f| f.check_id == ids::CHECK_SCAN_SECRETS);

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = ScanData {
        target: model.target.clone(),
        target_kind: model.kind,
        format: model.format,
        report_path: None,
        secrets_detected,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding]) -> Verdict {
    if findings.iter().any(|f| f.severity == Severity::Error) {
        return Verdict::Fail;
    }
    if findings.iter().any(|f| f.severity == Severity::Warning) {
        return Verdict::Warn;
    }
    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.target (missing last)
    // 3) location.line (missing last)
    // 4) check_id
    // 5) code
    // 6) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let (at, al) = match &a.location {
        Some(l) => (l.target.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };
    let (bt, bl) = match &b.location {
        Some(l) => (l.target.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(at.cmp(bt))
        .then(al.cmp(&bl))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
