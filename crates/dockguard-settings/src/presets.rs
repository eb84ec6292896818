use dockguard_domain::policy::{EffectiveConfig, FailFast};
use dockguard_domain::stderr::LogLevel;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything finer-grained belongs in repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        "audit" => audit_profile(),
        // default
        _ => ci_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        quiet: false,
        min_log_level: LogLevel::Info,
        fail_fast: FailFast {
            secrets: true,
            high_severity: true,
            licenses: true,
        },
        max_findings: 200,
    }
}

fn ci_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "ci".to_string(),
        quiet: false,
        min_log_level: LogLevel::Warning,
        fail_fast: FailFast {
            secrets: true,
            high_severity: true,
            licenses: false,
        },
        max_findings: 200,
    }
}

fn audit_profile() -> EffectiveConfig {
    // Report-only mode: everything is surfaced, nothing fails the run.
    EffectiveConfig {
        profile: "audit".to_string(),
        quiet: false,
        min_log_level: LogLevel::Info,
        fail_fast: FailFast::default(),
        max_findings: 200,
    }
}
