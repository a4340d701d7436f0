use std::time::Duration;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::{errors::ProviderError, models::domain::SearchHit};

const DDG_HTML_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub region: String,
    /// Provider recency window code, e.g. `d`, `w`, `m`, `y`.
    pub recency: String,
    pub max_results: usize,
    pub timeout: Duration,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, request: SearchRequest) -> Result<Vec<SearchHit>, ProviderError>;
}

/// Scrapes the DuckDuckGo HTML endpoint.
pub struct DuckDuckGoSearchProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGoSearchProvider {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_endpoint(DDG_HTML_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearchProvider {
    async fn search(&self, request: SearchRequest) -> Result<Vec<SearchHit>, ProviderError> {
        let mut form = vec![
            ("q", request.query.as_str()),
            ("kl", request.region.as_str()),
        ];
        if !request.recency.is_empty() {
            form.push(("df", request.recency.as_str()));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .header("Accept", "text/html")
            .timeout(request.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(parse_ddg_results(&body, request.max_results))
    }
}

/// Extracts result rows from a DuckDuckGo HTML results page.
pub fn parse_ddg_results(html: &str, limit: usize) -> Vec<SearchHit> {
    let document = Html::parse_document(html);

    let (Ok(container_sel), Ok(anchor_sel), Ok(snippet_sel)) = (
        Selector::parse("div.result"),
        Selector::parse("a.result__a"),
        Selector::parse("a.result__snippet, div.result__snippet, .result__snippet"),
    ) else {
        return Vec::new();
    };

    let mut hits = Vec::new();
    for container in document.select(&container_sel) {
        if hits.len() >= limit {
            break;
        }

        let Some(anchor) = container.select(&anchor_sel).next() else {
            continue;
        };
        let Some(url) = anchor.value().attr("href").and_then(normalize_result_href) else {
            continue;
        };

        let mut hit = SearchHit::new(url);
        let title = compact_text(anchor);
        if !title.is_empty() {
            hit = hit.with_title(title);
        }
        if let Some(snippet) = container.select(&snippet_sel).next().map(compact_text) {
            if !snippet.is_empty() {
                hit = hit.with_snippet(snippet);
            }
        }
        hits.push(hit);
    }

    hits
}

fn compact_text(element: ElementRef) -> String {
    let raw = element.text().collect::<Vec<_>>().join(" ");
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves protocol-relative and `/l/?uddg=` redirect links to the target URL.
/// Returns `None` for anything that is not http(s).
pub fn normalize_result_href(href: &str) -> Option<String> {
    let trimmed = href.trim();
    let absolute = if trimmed.starts_with("//") {
        format!("https:{}", trimmed)
    } else if trimmed.starts_with("/l/") {
        format!("https://duckduckgo.com{}", trimmed)
    } else {
        trimmed.to_string()
    };

    let parsed = Url::parse(&absolute).ok()?;
    let is_redirect = parsed
        .host_str()
        .is_some_and(|host| host.ends_with("duckduckgo.com"))
        && parsed.path().starts_with("/l/");

    let target = if is_redirect {
        let uddg = parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())?;
        Url::parse(uddg.trim()).ok()?
    } else {
        parsed
    };

    match target.scheme() {
        "http" | "https" => Some(target.to_string()),
        _ => None,
    }
}
