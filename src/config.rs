use std::{env, str::FromStr, time::Duration};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_api_base: String,
    pub llm_api_key: SecretString,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    pub inference_timeout_secs: u64,
    pub search_limit: usize,
    pub search_timeout_secs: u64,
    pub search_region: String,
    pub search_recency: String,
    pub fetch_timeout_secs: u64,
    pub worker_pool_size: usize,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env_or("WEB_SERVER_PORT", 8000),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| "http://localhost:11434/v1".to_string()),
            llm_api_key: SecretString::from(
                env::var("LLM_API_KEY").unwrap_or_else(|_| "ollama".to_string()),
            ),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "qwen2.5:7b".to_string()),
            llm_temperature: env_or("LLM_TEMPERATURE", 0.8),
            llm_max_tokens: env_or("LLM_MAX_TOKENS", 2000),
            inference_timeout_secs: env_or("INFERENCE_TIMEOUT_SECS", 90),
            search_limit: env_or("SEARCH_LIMIT", 10),
            search_timeout_secs: env_or("SEARCH_TIMEOUT_SECS", 5),
            search_region: env::var("SEARCH_REGION").unwrap_or_else(|_| "ru-ru".to_string()),
            search_recency: env::var("SEARCH_RECENCY").unwrap_or_else(|_| "y".to_string()),
            fetch_timeout_secs: env_or("FETCH_TIMEOUT_SECS", 5),
            worker_pool_size: env_or("WORKER_POOL_SIZE", 8),
        }
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.search_limit == 0 {
            return Err(AppError::ValidationError(
                "SEARCH_LIMIT must be greater than zero".to_string(),
            ));
        }
        if self.search_timeout_secs == 0
            || self.fetch_timeout_secs == 0
            || self.inference_timeout_secs == 0
        {
            return Err(AppError::ValidationError(
                "timeouts must be greater than zero seconds".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.llm_temperature) {
            return Err(AppError::ValidationError(format!(
                "LLM_TEMPERATURE must be within [0, 2], got {}",
                self.llm_temperature
            )));
        }
        if self.worker_pool_size == 0 {
            return Err(AppError::ValidationError(
                "WORKER_POOL_SIZE must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn inference_timeout(&self) -> Duration {
        Duration::from_secs(self.inference_timeout_secs)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            llm_api_base: "http://localhost:11434/v1".to_string(),
            llm_api_key: SecretString::from("test-key".to_string()),
            llm_model: "test-model".to_string(),
            llm_temperature: 0.8,
            llm_max_tokens: 2000,
            inference_timeout_secs: 2,
            search_limit: 3,
            search_timeout_secs: 5,
            search_region: "ru-ru".to_string(),
            search_recency: "y".to_string(),
            fetch_timeout_secs: 1,
            worker_pool_size: 4,
        }
    }
}
