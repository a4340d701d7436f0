use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::Config,
    constants::prompts::JSON_SCHEMA_INSTRUCTION,
    models::domain::{
        timing::{elapsed_ms, round_ms},
        QuestionItem,
    },
    services::{
        inference_provider::{InferenceProvider, InferenceRequest},
        worker_pool::{PoolError, WorkerPool},
    },
};

#[derive(Debug, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    title: Value,
    #[serde(default)]
    value: Value,
}

impl RawItem {
    fn into_item(self) -> Option<QuestionItem> {
        QuestionItem::new(&field_text(&self.title)?, &field_text(&self.value)?)
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Wrapped { data: Vec<RawItem> },
    Bare(Vec<RawItem>),
}

/// The accepted shapes of a model reply.
#[derive(Debug)]
pub enum ResponseShape {
    /// `{"data": [{title, value}, ...]}`
    Wrapped(Vec<RawItem>),
    /// `[{title, value}, ...]`
    Bare(Vec<RawItem>),
    Unrecognized(String),
}

impl ResponseShape {
    pub fn decode(content: &str) -> Self {
        match serde_json::from_str::<Payload>(strip_code_fence(content)) {
            Ok(Payload::Wrapped { data }) => ResponseShape::Wrapped(data),
            Ok(Payload::Bare(items)) => ResponseShape::Bare(items),
            Err(err) => ResponseShape::Unrecognized(err.to_string()),
        }
    }

    /// Valid items in reply order; blank entries are dropped.
    pub fn into_items(self) -> Vec<QuestionItem> {
        match self {
            ResponseShape::Wrapped(raw) | ResponseShape::Bare(raw) => {
                raw.into_iter().filter_map(RawItem::into_item).collect()
            }
            ResponseShape::Unrecognized(_) => Vec::new(),
        }
    }
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[derive(Debug, Clone)]
pub struct InferenceSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl InferenceSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
            max_tokens: config.llm_max_tokens,
            timeout: config.inference_timeout(),
        }
    }
}

pub struct InferenceService {
    provider: Arc<dyn InferenceProvider>,
    pool: WorkerPool,
    settings: InferenceSettings,
}

impl InferenceService {
    pub fn new(
        provider: Arc<dyn InferenceProvider>,
        pool: WorkerPool,
        settings: InferenceSettings,
    ) -> Self {
        Self {
            provider,
            pool,
            settings,
        }
    }

    /// Never fails: any provider error, timeout or unexpected reply shape
    /// gives an empty list together with the time spent.
    pub async fn invoke(&self, prompt: &str) -> (Vec<QuestionItem>, f64) {
        let started = Instant::now();
        let request = InferenceRequest {
            model: self.settings.model.clone(),
            prompt: format!("{}\n\n{}", prompt.trim_end(), JSON_SCHEMA_INSTRUCTION),
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            json_response: true,
        };

        let provider = Arc::clone(&self.provider);
        let result = self
            .pool
            .run(self.settings.timeout, async move { provider.complete(request).await })
            .await;
        let elapsed = elapsed_ms(started.elapsed());
        let model = &self.settings.model;

        let content = match result {
            Ok(Ok(content)) => content,
            Ok(Err(err)) => {
                log::warn!(
                    "inference.response.error model='{}' error='{}' llm_ms={}",
                    model,
                    err,
                    round_ms(elapsed)
                );
                return (Vec::new(), elapsed);
            }
            Err(PoolError::Timeout(limit)) => {
                log::warn!(
                    "inference.response.timeout model='{}' timeout_s={} llm_ms={}",
                    model,
                    limit.as_secs_f64(),
                    round_ms(elapsed)
                );
                return (Vec::new(), elapsed);
            }
            Err(PoolError::Failed(err)) => {
                log::error!(
                    "inference.response.error model='{}' error='{}' llm_ms={}",
                    model,
                    err,
                    round_ms(elapsed)
                );
                return (Vec::new(), elapsed);
            }
        };

        let shape = ResponseShape::decode(&content);
        if let ResponseShape::Unrecognized(reason) = &shape {
            log::warn!(
                "inference.response.empty model='{}' reason='{}' llm_ms={}",
                model,
                reason,
                round_ms(elapsed)
            );
        }
        let items = shape.into_items();
        log::info!(
            "inference.response.completed model='{}' items={} llm_ms={}",
            model,
            items.len(),
            round_ms(elapsed)
        );

        (items, elapsed)
    }
}
