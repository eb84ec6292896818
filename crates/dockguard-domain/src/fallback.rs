//! Best-effort secret extraction from unstructured (tabular) scanner output.

use crate::redact;
use regex::Regex;
use std::sync::LazyLock;

/// A fallback secret hit. The matched context is stored with assignment
/// values already masked; the raw match never leaves this module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretMatch {
    /// 1-based line of the match in the raw output.
    pub line: u32,
    /// Matched context with `key=value` values masked.
    pub redacted: String,
}

static SECRET_CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(API[_-]?KEY|SECRET|TOKEN)[^\n]{0,100}").expect("secret pattern compiles")
});

/// Scan raw text for secret-like keywords with up to 100 characters of
/// trailing context per match.
pub fn extract_secret_matches(output: &str) -> Vec<SecretMatch> {
    SECRET_CONTEXT
        .find_iter(output)
        .map(|m| SecretMatch {
            line: line_of(output, m.start()),
            redacted: redact::mask_assignments(m.as_str().trim()),
        })
        .collect()
}

/// 1-based line number of a byte offset: newlines before the offset, plus one.
fn line_of(text: &str, offset: usize) -> u32 {
    (text[..offset.min(text.len())]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
        + 1) as u32
}
