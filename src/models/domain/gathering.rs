use serde::{Deserialize, Serialize};

pub const PREVIEW_LENGTH: usize = 500;

/// One raw result row returned by the search provider.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchHit {
    pub url: String,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

impl SearchHit {
    pub fn new(url: impl Into<String>) -> Self {
        SearchHit {
            url: url.into(),
            title: None,
            snippet: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    pub urls: Vec<String>,
    pub elapsed_ms: f64,
}

/// Result of downloading and extracting a single page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 2xx response. `text` is empty when the page was off-topic or had no content.
    Extracted { url: String, status: u16, text: String },
    /// Non-2xx response.
    Rejected { url: String, status: u16 },
    /// Transport error or timeout.
    Failed { url: String, error: String },
}

impl FetchOutcome {
    pub fn url(&self) -> &str {
        match self {
            FetchOutcome::Extracted { url, .. }
            | FetchOutcome::Rejected { url, .. }
            | FetchOutcome::Failed { url, .. } => url,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            FetchOutcome::Extracted { text, .. } if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Status-class counters for a fetch batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub ok: usize,
    pub redirects: usize,
    pub client_errors: usize,
    pub server_errors: usize,
    pub failed: usize,
}

impl StatusCounts {
    pub fn record(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Extracted { status, .. } | FetchOutcome::Rejected { status, .. } => {
                match status / 100 {
                    2 => self.ok += 1,
                    3 => self.redirects += 1,
                    4 => self.client_errors += 1,
                    5 => self.server_errors += 1,
                    _ => self.failed += 1,
                }
            }
            FetchOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a FetchOutcome>) -> Self {
        let mut counts = StatusCounts::default();
        for outcome in outcomes {
            counts.record(outcome);
        }
        counts
    }
}

/// Text gathered from the web for one topic.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataGatheringResult {
    pub topic: String,
    pub urls: Vec<String>,
    pub text: String,
    pub text_length: usize,
    pub text_preview: String,
}

impl DataGatheringResult {
    /// Returns `None` when `text` holds nothing but whitespace.
    pub fn new(topic: &str, urls: Vec<String>, text: String) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }

        Some(DataGatheringResult {
            topic: topic.to_string(),
            urls,
            text_length: text.chars().count(),
            text_preview: text.chars().take(PREVIEW_LENGTH).collect(),
            text,
        })
    }
}
