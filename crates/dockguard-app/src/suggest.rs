//! The `suggest` use case: base image inspection + static lookup.

use dockguard_domain::{dockerfile, suggest};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuggestOutput {
    pub base_image: Option<String>,
    pub suggestions: Vec<String>,
}

/// Inspect Dockerfile text and look up smaller alternatives for its first
/// base image. No base image means no suggestions, not an error.
pub fn run_suggest(dockerfile_text: &str) -> SuggestOutput {
    let base_image = dockerfile::base_image(dockerfile_text).map(str::to_string);
    let suggestions = base_image
        .as_deref()
        .map(|image| {
            suggest::suggestions_for(image)
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default();

    SuggestOutput {
        base_image,
        suggestions,
    }
}
