//! Canonical redaction rules.
//!
//! Two rules, each pinned to one position in the pipeline:
//! - [`mask_secret_id`] for structured secret identifiers (2+2 middle mask)
//! - [`mask_assignments`] for `key=value` assignments in unstructured context
//!
//! Both are irreversible and idempotent; raw secret values never survive
//! either transformation.

use regex::Regex;
use std::sync::LazyLock;

/// Fixed mask for assignment values.
pub const MASK: &str = "******";

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"=[^\s"]+"#).expect("assignment pattern compiles"));

/// Keep the first two and last two characters, mask everything between.
///
/// Identifiers shorter than four characters are fully masked: there is not
/// enough material to keep anything recognizable without leaking most of it.
pub fn mask_secret_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() < 4 {
        return "*".repeat(chars.len());
    }
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i < 2 || i >= chars.len() - 2 {
                *c
            } else {
                '*'
            }
        })
        .collect()
}

/// Replace every `key=value` assignment value in `text` with [`MASK`].
pub fn mask_assignments(text: &str) -> String {
    ASSIGNMENT.replace_all(text, "=******").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keeps_two_and_two() {
        assert_eq!(mask_secret_id("abcd1234EFGH"), "ab********GH");
    }

    #[test]
    fn four_chars_have_no_middle() {
        assert_eq!(mask_secret_id("abcd"), "abcd");
    }

    #[test]
    fn short_identifiers_fully_masked() {
        assert_eq!(mask_secret_id("abc"), "***");
        assert_eq!(mask_secret_id("a"), "*");
        assert_eq!(mask_secret_id(""), "");
    }

    #[test]
    fn masks_assignment_value() {
        assert_eq!(
            mask_assignments("SECRET_TOKEN=abcd1234EFGH trailing"),
            "SECRET_TOKEN=****** trailing"
        );
    }

    #[test]
    fn masks_multiple_assignments() {
        assert_eq!(
            mask_assignments("API_KEY=aaa TOKEN=bbb"),
            "API_KEY=****** TOKEN=******"
        );
    }

    #[test]
    fn assignment_masking_is_idempotent() {
        let once = mask_assignments("TOKEN=hunter2");
        assert_eq!(mask_assignments(&once), once);
    }

    proptest! {
        #[test]
        fn id_masking_is_idempotent(id in ".*") {
            let once = mask_secret_id(&id);
            prop_assert_eq!(mask_secret_id(&once), once.clone());
        }

        #[test]
        fn middle_never_survives(id in "[a-zA-Z0-9]{5,64}") {
            let masked = mask_secret_id(&id);
            let chars: Vec<char> = id.chars().collect();
            let kept: String = chars[..2].iter().chain(&chars[chars.len() - 2..]).collect();
            // Every kept character is from the 2+2 edges; the middle is all '*'.
            let masked_chars: Vec<char> = masked.chars().collect();
            prop_assert_eq!(masked_chars.len(), chars.len());
            for c in &masked_chars[2..masked_chars.len() - 2] {
                prop_assert_eq!(*c, '*');
            }
            let edges: String = masked_chars[..2]
                .iter()
                .chain(&masked_chars[masked_chars.len() - 2..])
                .collect();
            prop_assert_eq!(edges, kept);
        }
    }
}
