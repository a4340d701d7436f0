use serde::Serialize;

use crate::models::domain::{QuestionItem, TimingMetrics};

/// Everything produced by one round-generation run.
#[derive(Clone, Debug, Serialize)]
pub struct RoundOutcome {
    pub topic: String,
    pub vibe: String,
    pub items: Vec<QuestionItem>,
    pub timing: TimingMetrics,
    pub used_fallback: bool,
}

impl RoundOutcome {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
