//! Stable DTOs and IDs used across the dockguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted scan report envelope
//! - stable string IDs and codes
//! - filesystem-safe target name handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod report;
pub mod target;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use report::{
    Finding, Location, OutputFormat, ReportEnvelope, ScanData, ScanReport, Severity, TargetKind,
    ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
pub use target::TargetName;
