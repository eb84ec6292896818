//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_SCAN_SECRETS: &str = "scan.secrets";
pub const CHECK_SCAN_VULNS: &str = "scan.vulnerabilities";
pub const CHECK_SCAN_LICENSES: &str = "scan.licenses";
pub const CHECK_SCAN_MISCONFIGS: &str = "scan.misconfigurations";
pub const CHECK_DOCKERFILE_ENV: &str = "dockerfile.env_secrets";

// Codes: scan.secrets
pub const CODE_SECRET_EXPOSED: &str = "secret_exposed";

// Codes: scan.vulnerabilities
pub const CODE_HIGH_SEVERITY_CVE: &str = "high_severity_cve";

// Codes: scan.licenses
pub const CODE_RISKY_LICENSE: &str = "risky_license";

// Codes: scan.misconfigurations
pub const CODE_MISCONFIGURATION: &str = "misconfiguration";

// Codes: dockerfile.env_secrets
pub const CODE_ENV_SECRET: &str = "env_secret";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
pub const CODE_TEMPLATE_MISSING: &str = "template_missing";
pub const CODE_SCANNER_FAILED: &str = "scanner_failed";
pub const CODE_UNPARSEABLE_OUTPUT: &str = "unparseable_output";
