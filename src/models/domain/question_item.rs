use serde::{Deserialize, Serialize};

/// A single generated quiz entry: the question text and its answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionItem {
    pub title: String,
    pub value: String,
}

impl QuestionItem {
    /// Builds an item from raw model output, trimming both fields.
    /// Returns `None` when either field is blank.
    pub fn new(title: &str, value: &str) -> Option<Self> {
        let title = title.trim();
        let value = value.trim();
        if title.is_empty() || value.is_empty() {
            return None;
        }

        Some(QuestionItem {
            title: title.to_string(),
            value: value.to_string(),
        })
    }
}
