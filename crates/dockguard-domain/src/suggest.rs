//! Static base-image suggestion table.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Known smaller-footprint alternatives, keyed by base image family (the
/// portion of the reference before any tag). Built once, never mutated.
static SUGGESTIONS: LazyLock<BTreeMap<&'static str, Vec<&'static str>>> = LazyLock::new(|| {
    BTreeMap::from([
        ("python", vec!["python:3.10-slim", "python:3.10-alpine"]),
        ("node", vec!["node:18-slim", "node:18-alpine"]),
        ("ubuntu", vec!["ubuntu:20.04-minimal"]),
        ("debian", vec!["debian:bullseye-slim"]),
        ("golang", vec!["golang:1.18-alpine"]),
    ])
});

/// Suggested alternatives for an image reference. Unknown families get an
/// empty slice.
pub fn suggestions_for(image: &str) -> &'static [&'static str] {
    let family = image.split(':').next().unwrap_or(image);
    SUGGESTIONS
        .get(family)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_with_tag_maps_to_family() {
        assert_eq!(
            suggestions_for("python:3.10"),
            ["python:3.10-slim", "python:3.10-alpine"]
        );
    }

    #[test]
    fn untagged_family_matches() {
        assert_eq!(suggestions_for("debian"), ["debian:bullseye-slim"]);
    }

    #[test]
    fn unknown_family_is_empty() {
        assert!(suggestions_for("scratch").is_empty());
        assert!(suggestions_for("quay.io/foo/bar:1").is_empty());
    }
}
