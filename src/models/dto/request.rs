use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_DEBUG_TOPIC: &str = "барные факты";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TopicQuery {
    #[validate(length(max = 200))]
    pub topic: Option<String>,
}

impl TopicQuery {
    /// The topic with surrounding whitespace removed, or `None` when blank.
    pub fn topic(&self) -> Option<&str> {
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn topic_or_default(&self) -> &str {
        self.topic().unwrap_or(DEFAULT_DEBUG_TOPIC)
    }
}
