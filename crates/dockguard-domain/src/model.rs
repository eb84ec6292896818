use dockguard_types::{OutputFormat, TargetKind};

/// Captured output of one scanner run, plus the context needed to
/// post-process it. Built by the adapter layer, consumed by [`crate::evaluate`].
#[derive(Clone, Debug)]
pub struct ScanModel {
    /// Raw target identifier: Dockerfile path or image reference.
    pub target: String,
    pub kind: TargetKind,
    pub format: OutputFormat,

    /// Scanner stdout, verbatim.
    pub stdout: String,

    /// Raw Dockerfile text, present only for Dockerfile targets.
    pub dockerfile: Option<String>,
}
