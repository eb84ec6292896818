use camino::Utf8Path;
use dockguard_types::{OutputFormat, TargetKind};

/// Default HTML template location, relative to the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/html.tpl";

/// A fully assembled scanner command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ScanInvocation {
    /// Single-line rendering for diagnostics.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Build the scanner argv for a target/format pair.
///
/// Dockerfile targets use configuration-scan mode; image targets request the
/// full scanner set. Templated output requires the template file to exist;
/// its absence is an error the caller reports as a failed run.
pub fn build_invocation(
    target: &str,
    kind: TargetKind,
    format: OutputFormat,
    template: &Utf8Path,
) -> anyhow::Result<ScanInvocation> {
    let mut args: Vec<String> = Vec::new();

    match kind {
        TargetKind::Dockerfile => args.push("config".to_string()),
        TargetKind::Image => {
            args.push("image".to_string());
            args.push("--scanners".to_string());
            args.push("vuln,secret,license,misconfig".to_string());
        }
    }

    match format {
        OutputFormat::Table | OutputFormat::Json => {
            args.push("--format".to_string());
            args.push(format.as_str().to_string());
        }
        OutputFormat::Html => {
            if !template.exists() {
                anyhow::bail!("HTML template not found at: {template}");
            }
            args.push("--format".to_string());
            args.push("template".to_string());
            args.push("--template".to_string());
            args.push(template.to_string());
        }
    }

    args.push(target.to_string());

    Ok(ScanInvocation {
        program: "trivy".to_string(),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn dockerfile_target_uses_config_mode() {
        let inv = build_invocation(
            "Dockerfile",
            TargetKind::Dockerfile,
            OutputFormat::Table,
            Utf8Path::new(DEFAULT_TEMPLATE_PATH),
        )
        .expect("build");
        assert_eq!(inv.program, "trivy");
        assert_eq!(inv.args, ["config", "--format", "table", "Dockerfile"]);
    }

    #[test]
    fn image_target_requests_all_scanners() {
        let inv = build_invocation(
            "nginx:latest",
            TargetKind::Image,
            OutputFormat::Json,
            Utf8Path::new(DEFAULT_TEMPLATE_PATH),
        )
        .expect("build");
        assert_eq!(
            inv.args,
            [
                "image",
                "--scanners",
                "vuln,secret,license,misconfig",
                "--format",
                "json",
                "nginx:latest"
            ]
        );
    }

    #[test]
    fn html_format_requires_template() {
        let missing = Utf8Path::new("no/such/template.tpl");
        let err = build_invocation("nginx", TargetKind::Image, OutputFormat::Html, missing)
            .expect_err("missing template");
        assert!(err.to_string().contains("HTML template not found"));
    }

    #[test]
    fn html_format_points_at_existing_template() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let template = Utf8PathBuf::from_path_buf(tmp.path().join("html.tpl")).expect("utf8 path");
        std::fs::write(&template, "<html/>").expect("write template");

        let inv = build_invocation("nginx", TargetKind::Image, OutputFormat::Html, &template)
            .expect("build");
        assert!(inv
            .args
            .windows(2)
            .any(|w| w[0] == "--template" && w[1] == template.as_str()));
        assert!(inv.command_line().starts_with("trivy image"));
    }
}
