use crate::fallback;
use crate::model::ScanModel;
use crate::policy::{gated_severity, EffectiveConfig};
use crate::redact;
use crate::trivy::ScannerReport;
use dockguard_types::{ids, Finding, Location};
use serde_json::json;

const HELP: &str =
    "Rotate the credential and move it out of the image; build-time secrets belong in BuildKit secret mounts.";

pub fn run_structured(
    report: &ScannerReport,
    model: &ScanModel,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) {
    let severity = gated_severity(cfg.fail_fast.secrets);

    for result in &report.results {
        let target = result.target.as_deref().unwrap_or(model.target.as_str());
        for secret in &result.secrets {
            let redacted = redact::mask_secret_id(&secret.secret_id);
            let description = if secret.title.is_empty() {
                "secret detected"
            } else {
                secret.title.as_str()
            };
            out.push(Finding {
                severity,
                check_id: ids::CHECK_SCAN_SECRETS.to_string(),
                code: ids::CODE_SECRET_EXPOSED.to_string(),
                message: format!("{description}: {redacted}"),
                location: Some(Location {
                    target: target.to_string(),
                    line: secret.start_line,
                }),
                help: Some(HELP.to_string()),
                data: json!({
                    "redacted": redacted,
                    "title": secret.title,
                }),
            });
        }
    }
}

pub fn run_fallback(model: &ScanModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let severity = gated_severity(cfg.fail_fast.secrets);

    for m in fallback::extract_secret_matches(&model.stdout) {
        out.push(Finding {
            severity,
            check_id: ids::CHECK_SCAN_SECRETS.to_string(),
            code: ids::CODE_SECRET_EXPOSED.to_string(),
            message: format!("possible secret: {}", m.redacted),
            location: Some(Location {
                target: model.target.clone(),
                line: Some(m.line),
            }),
            help: Some(HELP.to_string()),
            data: json!({ "redacted": m.redacted }),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{model_with_stdout, relaxed_config};
    use crate::trivy;
    use dockguard_types::Severity;

    #[test]
    fn structured_secret_is_redacted_and_located() {
        let report = trivy::parse_report(
            r#"{"Results": [{"Target": "app/.env", "Secrets": [
                {"SecretID": "abcd1234EFGH", "Title": "Generic API token", "StartLine": 7}
            ]}]}"#,
        )
        .expect("parse");
        let model = model_with_stdout("");
        let mut out = Vec::new();
        run_structured(&report, &model, &relaxed_config(), &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "Generic API token: ab********GH");
        assert!(!format!("{:?}", out[0]).contains("abcd1234EFGH"));
        let loc = out[0].location.as_ref().expect("location");
        assert_eq!(loc.target, "app/.env");
        assert_eq!(loc.line, Some(7));
    }

    #[test]
    fn gate_controls_severity() {
        let report = trivy::parse_report(
            r#"{"Results": [{"Secrets": [{"SecretID": "zzzz9999", "Title": "t"}]}]}"#,
        )
        .expect("parse");
        let model = model_with_stdout("");

        let mut cfg = relaxed_config();
        let mut out = Vec::new();
        run_structured(&report, &model, &cfg, &mut out);
        assert_eq!(out[0].severity, Severity::Warning);

        cfg.fail_fast.secrets = true;
        out.clear();
        run_structured(&report, &model, &cfg, &mut out);
        assert_eq!(out[0].severity, Severity::Error);
    }

    #[test]
    fn fallback_masks_assignments() {
        let model = model_with_stdout("row\nleaked SECRET_TOKEN=abcd1234EFGH here\n");
        let mut out = Vec::new();
        run_fallback(&model, &relaxed_config(), &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "possible secret: SECRET_TOKEN=****** here");
        assert_eq!(out[0].location.as_ref().and_then(|l| l.line), Some(2));
    }
}
