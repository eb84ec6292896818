use crate::model::ScanModel;
use crate::policy::EffectiveConfig;
use crate::trivy::ScannerReport;
use dockguard_types::Finding;

mod env_secrets;
mod licenses;
mod misconfigs;
mod secrets;
mod vulnerabilities;

/// Checks over a parsed scanner JSON document.
pub fn run_structured(
    report: &ScannerReport,
    model: &ScanModel,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) {
    secrets::run_structured(report, model, cfg, out);
    vulnerabilities::run_structured(report, cfg, out);
    licenses::run_structured(report, cfg, out);
    misconfigs::run(report, out);
}

/// Best-effort checks over raw tabular output.
pub fn run_fallback(model: &ScanModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    secrets::run_fallback(model, cfg, out);
    vulnerabilities::run_fallback(model, cfg, out);
    licenses::run_fallback(model, cfg, out);
}

/// Heuristics over the raw Dockerfile text, independent of scanner output.
pub fn run_dockerfile(model: &ScanModel, out: &mut Vec<Finding>) {
    env_secrets::run(model, out);
}
