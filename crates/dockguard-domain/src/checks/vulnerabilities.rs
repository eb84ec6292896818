use crate::model::ScanModel;
use crate::policy::{gated_severity, EffectiveConfig};
use crate::trivy::ScannerReport;
use dockguard_types::{ids, Finding, Location};
use serde_json::json;

/// The two severity labels CI policies gate on, matched case-sensitively.
const HIGH_SEVERITIES: [&str; 2] = ["HIGH", "CRITICAL"];

const HELP: &str = "Upgrade the affected package or rebuild on a newer base image tag.";

pub fn run_structured(report: &ScannerReport, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let severity = gated_severity(cfg.fail_fast.high_severity);

    for result in &report.results {
        for vuln in &result.vulnerabilities {
            if !HIGH_SEVERITIES.contains(&vuln.severity.as_str()) {
                continue;
            }
            out.push(Finding {
                severity,
                check_id: ids::CHECK_SCAN_VULNS.to_string(),
                code: ids::CODE_HIGH_SEVERITY_CVE.to_string(),
                message: format!("{} CVE: {} in {}", vuln.severity, vuln.id, vuln.pkg_name),
                location: result.target.as_ref().map(|t| Location {
                    target: t.clone(),
                    line: None,
                }),
                help: Some(HELP.to_string()),
                data: json!({
                    "id": vuln.id,
                    "package": vuln.pkg_name,
                    "severity": vuln.severity,
                    "title": vuln.title,
                }),
            });
        }
    }
}

/// No structured severity fields exist in tabular output; fall back to a raw
/// substring search for the two labels.
pub fn run_fallback(model: &ScanModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    if !model.stdout.contains("HIGH") && !model.stdout.contains("CRITICAL") {
        return;
    }
    out.push(Finding {
        severity: gated_severity(cfg.fail_fast.high_severity),
        check_id: ids::CHECK_SCAN_VULNS.to_string(),
        code: ids::CODE_HIGH_SEVERITY_CVE.to_string(),
        message: "high or critical vulnerabilities present in scanner output".to_string(),
        location: None,
        help: Some(HELP.to_string()),
        data: serde_json::Value::Null,
    });
}
