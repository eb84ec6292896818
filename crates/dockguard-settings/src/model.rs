use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `dockguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DockguardConfigV1 {
    /// Optional schema string for tooling (`dockguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Suppress the raw scanner stdout relay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,

    /// Minimum scanner stderr level to relay: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Directory for persisted raw scanner reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_dir: Option<String>,

    /// Fail-fast gates per finding category.
    #[serde(default)]
    pub fail_on: FailOnConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FailOnConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_severity: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<bool>,
}
