use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::errors::ProviderError;

#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask the service for a JSON object response.
    pub json_response: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Raw text of the model's reply.
    async fn complete(&self, request: InferenceRequest) -> Result<String, ProviderError>;
}

/// Chat-completions client for any OpenAI-compatible endpoint (OpenAI, Ollama, vLLM).
pub struct OpenAiInferenceProvider {
    client: Client<OpenAIConfig>,
}

impl OpenAiInferenceProvider {
    pub fn new(api_base: &str, api_key: &SecretString) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(api_base)
            .with_api_key(api_key.expose_secret());

        Self {
            client: Client::with_config(config),
        }
    }
}

pub fn chat_request_body(request: &InferenceRequest) -> Value {
    let mut body = json!({
        "model": request.model,
        "messages": [{ "role": "user", "content": request.prompt }],
        "temperature": request.temperature,
        "max_tokens": request.max_tokens,
    });
    if request.json_response {
        body["response_format"] = json!({ "type": "json_object" });
    }
    body
}

pub fn first_choice_content(response: &Value) -> Result<String, ProviderError> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ProviderError::Decode("response has no message content".to_string()))
}

#[async_trait]
impl InferenceProvider for OpenAiInferenceProvider {
    async fn complete(&self, request: InferenceRequest) -> Result<String, ProviderError> {
        let response: Value = self
            .client
            .chat()
            .create_byot(chat_request_body(&request))
            .await?;

        first_choice_content(&response)
    }
}
