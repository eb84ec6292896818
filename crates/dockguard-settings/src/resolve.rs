use crate::{model::DockguardConfigV1, presets};
use anyhow::Context;
use camino::Utf8PathBuf;
use dockguard_domain::policy::EffectiveConfig;
use dockguard_domain::stderr::LogLevel;
use dockguard_types::OutputFormat;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub quiet: Option<bool>,
    pub log_level: Option<String>,
    pub max_findings: Option<u32>,
    pub fail_on_secrets: Option<bool>,
    pub fail_on_high: Option<bool>,
    pub fail_on_licenses: Option<bool>,
    pub reports_dir: Option<Utf8PathBuf>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub reports_dir: Utf8PathBuf,
}

pub fn resolve_config(
    cfg: DockguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "ci".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(quiet) = overrides.quiet.or(cfg.quiet) {
        effective.quiet = quiet;
    }

    if let Some(level_s) = overrides.log_level.clone().or(cfg.log_level.clone()) {
        effective.min_log_level = parse_log_level(&level_s).context("resolve log_level")?;
    }

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // Fail-fast gates: config overrides preset, CLI flags override config.
    if let Some(v) = cfg.fail_on.secrets {
        effective.fail_fast.secrets = v;
    }
    if let Some(v) = cfg.fail_on.high_severity {
        effective.fail_fast.high_severity = v;
    }
    if let Some(v) = cfg.fail_on.licenses {
        effective.fail_fast.licenses = v;
    }
    if let Some(v) = overrides.fail_on_secrets {
        effective.fail_fast.secrets = v;
    }
    if let Some(v) = overrides.fail_on_high {
        effective.fail_fast.high_severity = v;
    }
    if let Some(v) = overrides.fail_on_licenses {
        effective.fail_fast.licenses = v;
    }

    let reports_dir = overrides
        .reports_dir
        .or_else(|| cfg.reports_dir.map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from("reports"));

    Ok(ResolvedConfig {
        effective,
        reports_dir,
    })
}

pub fn parse_log_level(v: &str) -> anyhow::Result<LogLevel> {
    match v {
        "info" => Ok(LogLevel::Info),
        "warning" | "warn" => Ok(LogLevel::Warning),
        "error" => Ok(LogLevel::Error),
        other => anyhow::bail!("unknown log level: {other} (expected info|warning|error)"),
    }
}

pub fn parse_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        "html" => Ok(OutputFormat::Html),
        other => anyhow::bail!("unknown output format: {other} (expected table|json|html)"),
    }
}
