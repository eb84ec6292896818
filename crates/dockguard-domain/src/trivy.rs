//! Serde view of the scanner's JSON report.
//!
//! Field names follow the scanner's own PascalCase. Every section is
//! optional-with-default so partial documents still parse; unknown fields
//! are ignored.

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScannerReport {
    #[serde(rename = "Results", default)]
    pub results: Vec<ResultRecord>,
}

/// One scanner result record: a file or artifact with its findings lists.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResultRecord {
    #[serde(rename = "Target")]
    pub target: Option<String>,

    #[serde(rename = "Secrets", default)]
    pub secrets: Vec<SecretRecord>,

    #[serde(rename = "Vulnerabilities", default)]
    pub vulnerabilities: Vec<VulnerabilityRecord>,

    #[serde(rename = "Licenses", default)]
    pub licenses: Vec<LicenseRecord>,

    #[serde(rename = "Misconfigurations", default)]
    pub misconfigurations: Vec<MisconfigRecord>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SecretRecord {
    /// The matched credential identifier. Redacted before it reaches any
    /// finding; the raw value must not leave this crate.
    #[serde(rename = "SecretID", default)]
    pub secret_id: String,

    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "StartLine")]
    pub start_line: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct VulnerabilityRecord {
    #[serde(rename = "VulnerabilityID", default)]
    pub id: String,

    #[serde(rename = "PkgName", default)]
    pub pkg_name: String,

    /// Scanner severity label, compared case-sensitively against
    /// `HIGH`/`CRITICAL`.
    #[serde(rename = "Severity", default)]
    pub severity: String,

    #[serde(rename = "Title")]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LicenseRecord {
    #[serde(rename = "License", default)]
    pub name: String,

    #[serde(rename = "PkgName")]
    pub pkg_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MisconfigRecord {
    #[serde(rename = "ID", default)]
    pub id: String,

    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Severity", default)]
    pub severity: String,
}

/// Parse captured stdout as a single scanner JSON document.
pub fn parse_report(text: &str) -> Result<ScannerReport, serde_json::Error> {
    serde_json::from_str(text)
}
