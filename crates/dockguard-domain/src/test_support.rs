//! Shared builders for unit tests in this crate.

use crate::model::ScanModel;
use crate::policy::{EffectiveConfig, FailFast};
use crate::stderr::LogLevel;
use dockguard_types::{OutputFormat, TargetKind};

pub fn model_with_stdout(stdout: &str) -> ScanModel {
    ScanModel {
        target: "nginx:latest".to_string(),
        kind: TargetKind::Image,
        format: OutputFormat::Json,
        stdout: stdout.to_string(),
        dockerfile: None,
    }
}

pub fn relaxed_config() -> EffectiveConfig {
    EffectiveConfig {
        profile: "audit".to_string(),
        quiet: false,
        min_log_level: LogLevel::Info,
        fail_fast: FailFast::default(),
        max_findings: 200,
    }
}
