//! Adapters with IO: scanner subprocess invocation, container runtime
//! queries, Dockerfile reading, and raw report persistence.
//!
//! This crate is allowed to spawn processes and touch the filesystem.
//! Post-processing of captured output belongs in `dockguard-domain`.

#![forbid(unsafe_code)]

mod docker;
mod dockerfile;
mod invocation;
mod report;
mod runner;

pub use docker::image_history;
pub use dockerfile::read_dockerfile;
pub use invocation::{build_invocation, ScanInvocation, DEFAULT_TEMPLATE_PATH};
pub use report::save_report;
pub use runner::{RawScanOutput, ScannerRunner, TrivyRunner};
