use crate::dockerfile;
use crate::model::ScanModel;
use dockguard_types::{ids, Finding, Location, Severity};
use serde_json::json;

/// Advisory heuristic over the Dockerfile text itself. The variable value is
/// never read, stored, or printed.
pub fn run(model: &ScanModel, out: &mut Vec<Finding>) {
    let Some(content) = model.dockerfile.as_deref() else {
        return;
    };

    for hit in dockerfile::env_secret_lines(content) {
        out.push(Finding {
            severity: Severity::Warning,
            check_id: ids::CHECK_DOCKERFILE_ENV.to_string(),
            code: ids::CODE_ENV_SECRET.to_string(),
            message: format!(
                "environment variable '{}' looks like a credential",
                hit.name
            ),
            location: Some(Location {
                target: model.target.clone(),
                line: Some(hit.line),
            }),
            help: Some(
                "Provide the value at runtime or via a BuildKit secret mount instead.".to_string(),
            ),
            data: json!({ "name": hit.name }),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::model_with_stdout;
    use dockguard_types::TargetKind;

    #[test]
    fn flags_declarations_without_values() {
        let mut model = model_with_stdout("");
        model.kind = TargetKind::Dockerfile;
        model.target = "Dockerfile".to_string();
        model.dockerfile = Some("FROM alpine\nENV AUTH_TOKEN=topsecret\n".to_string());

        let mut out = Vec::new();
        run(&model, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].message,
            "environment variable 'AUTH_TOKEN' looks like a credential"
        );
        assert_eq!(out[0].location.as_ref().and_then(|l| l.line), Some(2));
        assert!(!format!("{:?}", out[0]).contains("topsecret"));
    }

    #[test]
    fn image_targets_have_no_dockerfile_text() {
        let model = model_with_stdout("");
        let mut out = Vec::new();
        run(&model, &mut out);
        assert!(out.is_empty());
    }
}
