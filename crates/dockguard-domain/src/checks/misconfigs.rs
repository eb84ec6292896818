use crate::trivy::ScannerReport;
use dockguard_types::{ids, Finding, Location, Severity};
use serde_json::json;

/// Misconfigurations are hygiene findings: never gated, never failing the
/// run on their own. HIGH/CRITICAL entries surface as warnings, the rest as
/// info.
pub fn run(report: &ScannerReport, out: &mut Vec<Finding>) {
    for result in &report.results {
        for mis in &result.misconfigurations {
            let severity = match mis.severity.as_str() {
                "HIGH" | "CRITICAL" => Severity::Warning,
                _ => Severity::Info,
            };
            out.push(Finding {
                severity,
                check_id: ids::CHECK_SCAN_MISCONFIGS.to_string(),
                code: ids::CODE_MISCONFIGURATION.to_string(),
                message: format!("{} - {} ({})", mis.severity, mis.title, mis.id),
                location: result.target.as_ref().map(|t| Location {
                    target: t.clone(),
                    line: None,
                }),
                help: None,
                data: json!({
                    "id": mis.id,
                    "severity": mis.severity,
                }),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivy;

    #[test]
    fn maps_scanner_severity_to_warning_or_info() {
        let report = trivy::parse_report(
            r#"{"Results": [{"Target": "Dockerfile", "Misconfigurations": [
                {"ID": "DS002", "Title": "Image user should not be root", "Severity": "HIGH"},
                {"ID": "DS026", "Title": "No HEALTHCHECK defined", "Severity": "LOW"}
            ]}]}"#,
        )
        .expect("parse");
        let mut out = Vec::new();
        run(&report, &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].severity, Severity::Warning);
        assert_eq!(
            out[0].message,
            "HIGH - Image user should not be root (DS002)"
        );
        assert_eq!(out[1].severity, Severity::Info);
    }
}
