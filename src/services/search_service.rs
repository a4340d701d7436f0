use std::{collections::HashSet, sync::Arc, time::{Duration, Instant}};

use crate::{
    config::Config,
    constants::keywords::{NEGATIVE_QUERY_TERMS, POSITIVE_QUERY_TERMS},
    errors::{AppError, AppResult},
    models::domain::{timing::{elapsed_ms, round_ms}, SearchHit, SearchOutcome},
    services::{
        relevance::{is_allowed_domain, snippet_is_relevant},
        search_provider::{SearchProvider, SearchRequest},
        worker_pool::{PoolError, WorkerPool},
    },
};

/// Keyword tails appended to a topic to build query variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryExpansion {
    pub positive_terms: Vec<String>,
    pub negative_terms: Vec<String>,
}

impl Default for QueryExpansion {
    fn default() -> Self {
        Self {
            positive_terms: POSITIVE_QUERY_TERMS.iter().map(|t| t.to_string()).collect(),
            negative_terms: NEGATIVE_QUERY_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl QueryExpansion {
    /// Query variants ordered from most to least restrictive, without duplicates:
    /// topic + positive + negated, topic + positive, topic + negated, topic.
    pub fn variants(&self, topic: &str) -> Vec<String> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Vec::new();
        }

        let positive = self.positive_terms.join(" ");
        let negated = self
            .negative_terms
            .iter()
            .map(|term| format!("-{}", term))
            .collect::<Vec<_>>()
            .join(" ");

        let candidates = [
            join_query(&[topic, &positive, &negated]),
            join_query(&[topic, &positive]),
            join_query(&[topic, &negated]),
            topic.to_string(),
        ];

        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .filter(|query| seen.insert(query.clone()))
            .collect()
    }

    /// Every variant with the snippet filter enforced, then every variant relaxed.
    pub fn plan(&self, topic: &str) -> Vec<SearchPass> {
        let variants = self.variants(topic);
        [true, false]
            .into_iter()
            .flat_map(|enforce_snippet| {
                variants.iter().map(move |query| SearchPass {
                    query: query.clone(),
                    enforce_snippet,
                })
            })
            .collect()
    }
}

fn join_query(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One search request in the escalation plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPass {
    pub query: String,
    pub enforce_snippet: bool,
}

/// Filters raw hits to allowed, unique URLs (and relevant snippets when
/// `enforce_snippet` is set), keeping at most `limit`.
pub fn accept_hits(hits: &[SearchHit], enforce_snippet: bool, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for hit in hits {
        if urls.len() >= limit {
            break;
        }
        if !is_allowed_domain(&hit.url) {
            continue;
        }
        if enforce_snippet && !snippet_is_relevant(hit.snippet.as_deref()) {
            continue;
        }
        if !seen.insert(hit.url.clone()) {
            continue;
        }
        urls.push(hit.url.clone());
    }

    urls
}

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub limit: usize,
    pub request_timeout: Duration,
    pub ceiling: Duration,
    pub region: String,
    pub recency: String,
}

impl SearchSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            limit: config.search_limit,
            request_timeout: config.fetch_timeout(),
            ceiling: config.search_timeout(),
            region: config.search_region.clone(),
            recency: config.search_recency.clone(),
        }
    }
}

pub struct SearchService {
    provider: Arc<dyn SearchProvider>,
    pool: WorkerPool,
    settings: SearchSettings,
    expansion: QueryExpansion,
}

impl SearchService {
    pub fn new(provider: Arc<dyn SearchProvider>, pool: WorkerPool, settings: SearchSettings) -> Self {
        Self {
            provider,
            pool,
            settings,
            expansion: QueryExpansion::default(),
        }
    }

    pub fn with_expansion(mut self, expansion: QueryExpansion) -> Self {
        self.expansion = expansion;
        self
    }

    /// Runs the escalation plan on the worker pool and returns the first
    /// non-empty URL list. Only exceeding the search ceiling is an error.
    pub async fn search(&self, topic: &str) -> AppResult<SearchOutcome> {
        let started = Instant::now();
        let plan = self.expansion.plan(topic);
        let provider = Arc::clone(&self.provider);
        let settings = self.settings.clone();

        let result = self
            .pool
            .run(settings.ceiling, execute_plan(provider, plan, settings.clone()))
            .await;
        let elapsed = elapsed_ms(started.elapsed());

        match result {
            Ok(urls) => {
                log::info!(
                    "search.completed topic='{}' urls={} search_ms={}",
                    topic,
                    urls.len(),
                    round_ms(elapsed)
                );
                Ok(SearchOutcome {
                    urls,
                    elapsed_ms: elapsed,
                })
            }
            Err(PoolError::Timeout(ceiling)) => {
                log::warn!(
                    "search.timeout topic='{}' timeout_s={} search_ms={}",
                    topic,
                    ceiling.as_secs_f64(),
                    round_ms(elapsed)
                );
                Err(AppError::Timeout(format!(
                    "search for '{}' exceeded {:?}",
                    topic, ceiling
                )))
            }
            Err(PoolError::Failed(err)) => {
                log::error!("search.failed topic='{}' error='{}'", topic, err);
                Ok(SearchOutcome {
                    urls: Vec::new(),
                    elapsed_ms: elapsed,
                })
            }
        }
    }
}

async fn execute_plan(
    provider: Arc<dyn SearchProvider>,
    plan: Vec<SearchPass>,
    settings: SearchSettings,
) -> Vec<String> {
    for pass in plan {
        let request = SearchRequest {
            query: pass.query.clone(),
            region: settings.region.clone(),
            recency: settings.recency.clone(),
            max_results: settings.limit * 2,
            timeout: settings.request_timeout,
        };

        let hits = match provider.search(request).await {
            Ok(hits) => hits,
            Err(err) => {
                log::warn!(
                    "search.provider_error query='{}' error='{}'",
                    pass.query,
                    err
                );
                continue;
            }
        };

        let urls = accept_hits(&hits, pass.enforce_snippet, settings.limit);
        log::debug!(
            "search.pass query='{}' enforce_snippet={} raw={} accepted={}",
            pass.query,
            pass.enforce_snippet,
            hits.len(),
            urls.len()
        );
        if !urls.is_empty() {
            return urls;
        }
    }

    Vec::new()
}
