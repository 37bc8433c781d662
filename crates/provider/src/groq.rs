//! Groq backend, using the OpenAI-compatible chat-completions shape.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use tracing::debug;
use uplift_core::config::ProviderConfig;

use crate::{prompt, ProviderError, QuoteGenerator};

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

pub struct GroqClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqClient {
    pub fn new(config: &ProviderConfig, api_key: SecretString) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.base_url.clone().unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn request_body(&self, feeling: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt::SYSTEM_PROMPT },
                { "role": "user", "content": prompt::user_prompt(feeling) },
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }

    fn extract_completion(value: &Value) -> Result<String, ProviderError> {
        value
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ProviderError::Malformed("expected choices[0].message.content".to_string())
            })
    }
}

#[async_trait]
impl QuoteGenerator for GroqClient {
    async fn generate(&self, feeling: &str) -> Result<String, ProviderError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.request_body(feeling))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status: status.as_u16(), body });
        }

        let value = response.json::<Value>().await?;
        let completion = Self::extract_completion(&value)?;
        debug!(
            event_name = "provider.groq.completion",
            completion_chars = completion.chars().count(),
            "chat completion received"
        );
        Ok(completion)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}
