use crate::stderr::LogLevel;
use dockguard_types::Severity;

/// Fail-fast gates. Each category independently converts its findings into
/// errors (and the run into a failure) when set; unset gates can never fail
/// the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FailFast {
    pub secrets: bool,
    pub high_severity: bool,
    pub licenses: bool,
}

/// Severity a gated category emits at: errors fail the run, warnings do not.
pub fn gated_severity(gate: bool) -> Severity {
    if gate {
        Severity::Error
    } else {
        Severity::Warning
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub quiet: bool,
    pub min_log_level: LogLevel,
    pub fail_fast: FailFast,
    pub max_findings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_maps_to_severity() {
        assert_eq!(gated_severity(true), Severity::Error);
        assert_eq!(gated_severity(false), Severity::Warning);
    }
}
