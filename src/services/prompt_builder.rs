use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    constants::prompts::{FALLBACK_CONTEXT_TEMPLATE, ROUND_PROMPT_TEMPLATE},
    models::domain::DataGatheringResult,
};

/// Upper bound on gathered text placed into a prompt.
pub const MAX_CONTEXT_CHARS: usize = 10_000;

pub fn fallback_context(topic: &str) -> String {
    FALLBACK_CONTEXT_TEMPLATE.replace("{topic}", topic)
}

/// Gathered text when available, the fallback narrative otherwise.
pub fn context_text(topic: &str, gathered: Option<&DataGatheringResult>) -> String {
    match gathered {
        Some(result) => result.text.chars().take(MAX_CONTEXT_CHARS).collect(),
        None => fallback_context(topic),
    }
}

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(topic|vibe|context)\}").expect("PLACEHOLDER_REGEX is a valid regex pattern")
});

/// Fills the round template in a single pass: placeholder-like text inside
/// the topic, vibe or context is copied as is.
pub fn build_round_prompt(topic: &str, vibe: &str, context: &str) -> String {
    PLACEHOLDER_REGEX
        .replace_all(ROUND_PROMPT_TEMPLATE, |caps: &Captures| match &caps[1] {
            "topic" => topic.to_string(),
            "vibe" => vibe.to_string(),
            _ => context.to_string(),
        })
        .into_owned()
}
