use crate::model::ScanModel;
use crate::policy::{gated_severity, EffectiveConfig};
use crate::trivy::ScannerReport;
use dockguard_types::{ids, Finding, Location};
use serde_json::json;
use std::collections::BTreeSet;

/// Copyleft markers searched as substrings of the license name.
const RISKY_MARKERS: [&str; 3] = ["GPL", "LGPL", "AGPL"];

const HELP: &str =
    "Keep copyleft packages out of the runtime stage, or record the obligation deliberately.";

pub fn run_structured(report: &ScannerReport, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let severity = gated_severity(cfg.fail_fast.licenses);
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for result in &report.results {
        for license in &result.licenses {
            if !RISKY_MARKERS.iter().any(|m| license.name.contains(m)) {
                continue;
            }
            // One finding per distinct license name across all results.
            if !seen.insert(license.name.as_str()) {
                continue;
            }
            out.push(Finding {
                severity,
                check_id: ids::CHECK_SCAN_LICENSES.to_string(),
                code: ids::CODE_RISKY_LICENSE.to_string(),
                message: format!("risky license detected: {}", license.name),
                location: result.target.as_ref().map(|t| Location {
                    target: t.clone(),
                    line: None,
                }),
                help: Some(HELP.to_string()),
                data: json!({
                    "license": license.name,
                    "package": license.pkg_name,
                }),
            });
        }
    }
}

/// No structured license fields exist in tabular output; fall back to a raw
/// substring search for the copyleft markers.
pub fn run_fallback(model: &ScanModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    if !RISKY_MARKERS.iter().any(|m| model.stdout.contains(m)) {
        return;
    }
    out.push(Finding {
        severity: gated_severity(cfg.fail_fast.licenses),
        check_id: ids::CHECK_SCAN_LICENSES.to_string(),
        code: ids::CODE_RISKY_LICENSE.to_string(),
        message: "risky licenses present in scanner output".to_string(),
        location: None,
        help: Some(HELP.to_string()),
        data: serde_json::Value::Null,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{model_with_stdout, relaxed_config};
    use crate::trivy;

    #[test]
    fn flags_copyleft_names_once_each() {
        let report = trivy::parse_report(
            r#"{"Results": [
                {"Target": "a", "Licenses": [
                    {"License": "GPL-3.0", "PkgName": "bash"},
                    {"License": "MIT", "PkgName": "jq"}
                ]},
                {"Target": "b", "Licenses": [
                    {"License": "GPL-3.0", "PkgName": "coreutils"},
                    {"License": "LGPL-2.1", "PkgName": "glibc"}
                ]}
            ]}"#,
        )
        .expect("parse");
        let mut out = Vec::new();
        run_structured(&report, &relaxed_config(), &mut out);

        let messages: Vec<&str> = out.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "risky license detected: GPL-3.0",
                "risky license detected: LGPL-2.1",
            ]
        );
    }

    #[test]
    fn fallback_matches_marker_substring() {
        let mut out = Vec::new();
        run_fallback(
            &model_with_stdout("glibc  LGPL-2.1  2.36"),
            &relaxed_config(),
            &mut out,
        );
        assert_eq!(out.len(), 1);

        out.clear();
        run_fallback(
            &model_with_stdout("jq  MIT  1.7"),
            &relaxed_config(),
            &mut out,
        );
        assert!(out.is_empty());
    }
}
