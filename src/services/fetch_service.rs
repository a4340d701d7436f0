use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use futures::future::join_all;

use crate::{
    models::domain::{
        timing::{elapsed_ms, round_ms},
        FetchOutcome, StatusCounts,
    },
    services::{
        extraction::{extract_readable_text, truncate_chunk},
        page_fetcher::PageFetcher,
    },
};

pub const PAGE_SEPARATOR: &str = "\n\n";

/// Combined page text of one fetch batch.
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    pub text: String,
    pub elapsed_ms: f64,
    pub pages_used: usize,
    pub counts: StatusCounts,
}

pub struct FetchService {
    fetcher: Arc<dyn PageFetcher>,
    request_timeout: Duration,
}

impl FetchService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, request_timeout: Duration) -> Self {
        Self {
            fetcher,
            request_timeout,
        }
    }

    /// Downloads all `urls` concurrently and joins the relevant text of every
    /// page, each cut to the chunk limit. Failures only drop that page.
    pub async fn fetch_and_extract(&self, urls: &[String], topic: &str) -> FetchReport {
        let started = Instant::now();

        let outcomes = join_all(urls.iter().map(|url| self.fetch_one(url, topic))).await;

        let counts = StatusCounts::from_outcomes(&outcomes);
        let chunks: Vec<String> = outcomes
            .iter()
            .filter_map(FetchOutcome::text)
            .map(truncate_chunk)
            .collect();
        let text = chunks.join(PAGE_SEPARATOR);
        let elapsed = elapsed_ms(started.elapsed());

        log::info!(
            "fetch.completed urls={} pages={} dl_ms={} len={} ok={} redirects={} client_errors={} server_errors={} failed={}",
            urls.len(),
            chunks.len(),
            round_ms(elapsed),
            text.chars().count(),
            counts.ok,
            counts.redirects,
            counts.client_errors,
            counts.server_errors,
            counts.failed
        );

        FetchReport {
            text,
            elapsed_ms: elapsed,
            pages_used: chunks.len(),
            counts,
        }
    }

    async fn fetch_one(&self, url: &str, topic: &str) -> FetchOutcome {
        let started = Instant::now();
        let result = tokio::time::timeout(self.request_timeout, self.fetcher.get(url)).await;
        let latency = round_ms(elapsed_ms(started.elapsed()));

        let page = match result {
            Ok(Ok(page)) => page,
            Ok(Err(err)) => {
                log::warn!("http.fetch_failed url='{}' error='{}' t_ms={}", url, err, latency);
                return FetchOutcome::Failed {
                    url: url.to_string(),
                    error: err.to_string(),
                };
            }
            Err(_) => {
                log::warn!("http.fetch_failed url='{}' error='timed out' t_ms={}", url, latency);
                return FetchOutcome::Failed {
                    url: url.to_string(),
                    error: format!("timed out after {:?}", self.request_timeout),
                };
            }
        };

        log::info!("http.fetched url='{}' status={} t_ms={}", url, page.status, latency);
        if !(200..300).contains(&page.status) {
            return FetchOutcome::Rejected {
                url: url.to_string(),
                status: page.status,
            };
        }

        let text = extract_readable_text(&page.body, topic);
        if text.is_empty() {
            log::debug!("fetch.page_discarded url='{}'", url);
        }
        FetchOutcome::Extracted {
            url: url.to_string(),
            status: page.status,
            text,
        }
    }
}
