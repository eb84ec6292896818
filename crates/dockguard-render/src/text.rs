use crate::{RenderableReport, RenderableSeverity, RenderableSizeBreakdown, RenderableVerdictStatus};

/// Console summary of a scan report.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "Verdict: {} for {}\nFindings: {} (emitted) / {} (total)\n",
        verdict, report.data.target, report.data.findings_emitted, report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("Note: {}\n", r));
    }
    if let Some(path) = &report.data.report_path {
        out.push_str(&format!("Report saved to: {}\n", path));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push('\n');
    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        match &f.location {
            Some(loc) => {
                let line = loc
                    .line
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "-".to_string());
                out.push_str(&format!(
                    "- [{}] {}/{}: {} ({} line {})\n",
                    sev, f.check_id, f.code, f.message, loc.target, line
                ));
            }
            None => {
                out.push_str(&format!(
                    "- [{}] {}/{}: {}\n",
                    sev, f.check_id, f.code, f.message
                ));
            }
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  help: {}\n", help));
        }
    }

    out
}

/// Console list of smaller base-image alternatives.
pub fn render_suggestions(base_image: &str, suggestions: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Base image: {}\n", base_image));
    if suggestions.is_empty() {
        out.push_str("No smaller alternatives known for this image family.\n");
        return out;
    }
    out.push_str("Smaller alternatives:\n");
    for s in suggestions {
        out.push_str(&format!("- {}\n", s));
    }
    out
}

/// Console breakdown of image layer sizes.
pub fn render_size_breakdown(breakdown: &RenderableSizeBreakdown) -> String {
    let mut out = String::new();
    out.push_str("Image size breakdown:\n");
    for layer in &breakdown.layers {
        out.push_str(&format!("- {} <- {}\n", layer.size, layer.created_by));
    }
    let total_mb = breakdown.total_bytes as f64 / (1024.0 * 1024.0);
    out.push_str(&format!("Total image size: {:.2} MB\n", total_mb));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        RenderableData, RenderableFinding, RenderableLayer, RenderableLocation, RenderableSeverity,
    };

    fn data() -> RenderableData {
        RenderableData {
            target: "nginx:latest".to_string(),
            findings_emitted: 0,
            findings_total: 0,
            secrets_detected: false,
            report_path: None,
            truncated_reason: None,
        }
    }

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            findings: Vec::new(),
            data: data(),
        };
        let text = render_text(&report);
        assert!(text.contains("Verdict: PASS for nginx:latest"));
        assert!(text.contains("No findings."));
    }

    #[test]
    fn renders_finding_with_placeholder_line() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                check_id: "scan.secrets".to_string(),
                code: "secret_exposed".to_string(),
                message: "API token: ab********GH".to_string(),
                location: Some(RenderableLocation {
                    target: ".env".to_string(),
                    line: None,
                }),
                help: Some("rotate it".to_string()),
            }],
            data: RenderableData {
                findings_emitted: 1,
                findings_total: 1,
                secrets_detected: true,
                ..data()
            },
        };
        let text = render_text(&report);
        assert!(text.contains(
            "- [ERROR] scan.secrets/secret_exposed: API token: ab********GH (.env line -)"
        ));
        assert!(text.contains("help: rotate it"));
    }

    #[test]
    fn renders_suggestions() {
        let text = render_suggestions(
            "python:3.10",
            &["python:3.10-slim".to_string(), "python:3.10-alpine".to_string()],
        );
        assert!(text.contains("Base image: python:3.10"));
        assert!(text.contains("- python:3.10-slim"));
    }

    #[test]
    fn renders_size_breakdown_with_mb_total() {
        let breakdown = RenderableSizeBreakdown {
            layers: vec![RenderableLayer {
                size: "10MB".to_string(),
                created_by: "RUN pip install .".to_string(),
            }],
            total_bytes: 10 * 1024 * 1024 + 512 * 1024,
        };
        let text = render_size_breakdown(&breakdown);
        assert!(text.contains("- 10MB <- RUN pip install ."));
        assert!(text.contains("Total image size: 10.50 MB"));
    }
}
