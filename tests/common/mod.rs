#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use barquiz_server::{
    config::Config,
    errors::{FetchError, ProviderError},
    models::domain::SearchHit,
    services::{
        inference_provider::{InferenceProvider, InferenceRequest},
        page_fetcher::{FetchedPage, PageFetcher},
        search_provider::{SearchProvider, SearchRequest},
    },
};

pub fn test_config() -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8000,
        llm_api_base: "http://localhost:11434/v1".to_string(),
        llm_api_key: SecretString::from("test-key".to_string()),
        llm_model: "test-model".to_string(),
        llm_temperature: 0.8,
        llm_max_tokens: 2000,
        inference_timeout_secs: 2,
        search_limit: 3,
        search_timeout_secs: 1,
        search_region: "ru-ru".to_string(),
        search_recency: "y".to_string(),
        fetch_timeout_secs: 1,
        worker_pool_size: 4,
    }
}

/// Returns the same hits for every query and records what was asked.
pub struct InMemorySearchProvider {
    hits: Vec<SearchHit>,
    delay: Option<Duration>,
    queries: Arc<RwLock<Vec<String>>>,
}

impl InMemorySearchProvider {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            delay: None,
            queries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn stalled(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::empty()
        }
    }

    pub async fn queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl SearchProvider for InMemorySearchProvider {
    async fn search(&self, request: SearchRequest) -> Result<Vec<SearchHit>, ProviderError> {
        self.queries.write().await.push(request.query);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.hits.clone())
    }
}

pub enum PageBehavior {
    Respond(u16, String),
    Hang,
    Fail,
}

/// Serves canned pages by URL; unknown URLs fail.
pub struct InMemoryPageFetcher {
    pages: HashMap<String, PageBehavior>,
}

impl InMemoryPageFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    pub fn with_page(mut self, url: &str, behavior: PageBehavior) -> Self {
        self.pages.insert(url.to_string(), behavior);
        self
    }
}

#[async_trait]
impl PageFetcher for InMemoryPageFetcher {
    async fn get(&self, url: &str) -> Result<FetchedPage, FetchError> {
        match self.pages.get(url) {
            Some(PageBehavior::Respond(status, body)) => Ok(FetchedPage {
                status: *status,
                body: body.clone(),
            }),
            Some(PageBehavior::Hang) => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Err(FetchError::Transport("unreachable".to_string()))
            }
            Some(PageBehavior::Fail) | None => {
                Err(FetchError::Transport("connection refused".to_string()))
            }
        }
    }
}

/// Replies with a fixed string and keeps the prompts it received.
pub struct ScriptedInferenceProvider {
    reply: Result<String, ProviderError>,
    delay: Option<Duration>,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl ScriptedInferenceProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            delay: None,
            prompts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn slow(reply: &str, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::replying(reply)
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Err(ProviderError::Status(500)),
            delay: None,
            prompts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.read().await.clone()
    }
}

#[async_trait]
impl InferenceProvider for ScriptedInferenceProvider {
    async fn complete(&self, request: InferenceRequest) -> Result<String, ProviderError> {
        self.prompts.write().await.push(request.prompt);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone()
    }
}

pub fn html_page(title: &str, paragraphs: &[&str]) -> String {
    let body: String = paragraphs.iter().map(|p| format!("<p>{p}</p>")).collect();
    format!("<html><head><title>{title}</title></head><body><article>{body}</article></body></html>")
}

pub fn five_items_json() -> String {
    let items: Vec<serde_json::Value> = (1..=5)
        .map(|i| {
            serde_json::json!({
                "title": format!("Угадай: напиток номер {i}?"),
                "value": format!("Ответ {i}"),
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}
