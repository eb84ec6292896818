//! Use case orchestration for dockguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! domain, scan, settings, and render layers. It is intentionally thin and
//! delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod report;
mod scan;
mod size;
mod suggest;

pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use report::{
    parse_report_json, runtime_error_report, serialize_report, size_to_renderable, to_renderable,
    verdict_exit_code,
};
pub use scan::{run_scan, ScanInput, ScanOutput};
pub use size::run_size;
pub use suggest::{run_suggest, SuggestOutput};
