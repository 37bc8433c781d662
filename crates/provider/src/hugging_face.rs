//! Hugging Face Inference API backend (text-completion shape).
//!
//! Unlike the chat-completion shape, this API signals "model is cold" with a
//! structured error body carrying `estimated_time`; that signal is the one
//! case the service reports to callers instead of masking with a fallback.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use tracing::debug;
use uplift_core::config::ProviderConfig;

use crate::{prompt, ProviderError, QuoteGenerator};

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

const TOP_P: f32 = 0.9;

pub struct HuggingFaceClient {
    http: reqwest::Client,
    url: String,
    api_key: SecretString,
    temperature: f32,
    max_new_tokens: u32,
}

impl HuggingFaceClient {
    pub fn new(config: &ProviderConfig, api_key: SecretString) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            http,
            url: format!("{}/models/{}", base_url.trim_end_matches('/'), config.model),
            api_key,
            temperature: config.temperature,
            max_new_tokens: config.max_tokens,
        })
    }

    fn request_body(&self, feeling: &str) -> Value {
        json!({
            "inputs": prompt::inference_prompt(feeling),
            "parameters": {
                "max_new_tokens": self.max_new_tokens,
                "temperature": self.temperature,
                "top_p": TOP_P,
                "return_full_text": false,
            },
        })
    }

    /// Success responses are a list with one `generated_text` entry.
    fn extract_completion(value: &Value) -> Result<String, ProviderError> {
        value
            .pointer("/0/generated_text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ProviderError::Malformed("expected [{\"generated_text\": ...}]".to_string())
            })
    }

    /// Error bodies are `{error, estimated_time?}`. A load-in-progress body
    /// becomes `ModelLoading`; anything else keeps its original status.
    fn classify_error(status: u16, body: &str) -> ProviderError {
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            let message = value.get("error").and_then(Value::as_str).unwrap_or_default();
            let estimated_secs = value.get("estimated_time").and_then(Value::as_f64);
            if estimated_secs.is_some() || message.to_lowercase().contains("loading") {
                return ProviderError::ModelLoading { estimated_secs };
            }
        }
        ProviderError::Status { status, body: body.to_string() }
    }
}

#[async_trait]
impl QuoteGenerator for HuggingFaceClient {
    async fn generate(&self, feeling: &str) -> Result<String, ProviderError> {
        let response = self
            .http
            .post(&self.url)
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
            return Err(Self::classify_error(status.as_u16(), &body));
        }

        let value = response.json::<Value>().await?;
        // A 200 can still carry a structured error body.
        if value.get("error").is_some() {
            return Err(Self::classify_error(status.as_u16(), &value.to_string()));
        }

        let completion = Self::extract_completion(&value)?;
        debug!(
            event_name = "provider.hugging_face.completion",
            completion_chars = completion.chars().count(),
            "inference completion received"
        );
        Ok(completion)
    }

    fn name(&self) -> &'static str {
        "hugging_face"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uplift_core::config::{AppConfig, ProviderBackend};

    use super::HuggingFaceClient;
    use crate::ProviderError;

    fn client() -> HuggingFaceClient {
        let mut config = AppConfig::default();
        config.provider.backend = ProviderBackend::HuggingFace;
        config.provider.model = "mistralai/Mistral-7B-Instruct-v0.2".to_string();
        HuggingFaceClient::new(&config.provider, "hf-test".to_string().into()).expect("client")
    }

    #[test]
    fn url_joins_base_and_model() {
        assert_eq!(
            client().url,
            "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.2"
        );
    }

    #[test]
    fn request_body_excludes_prompt_echo() {
        let body = client().request_body("stuck");
        assert_eq!(body["parameters"]["return_full_text"], false);
        assert_eq!(body["parameters"]["max_new_tokens"], 100);
        assert!(body["inputs"].as_str().unwrap().ends_with("feeling: stuck"));
    }

    #[test]
    fn extracts_generated_text_from_list_response() {
        let value = json!([{ "generated_text": "Every small step counts double on hard days." }]);
        let completion = HuggingFaceClient::extract_completion(&value).expect("completion");
        assert_eq!(completion, "Every small step counts double on hard days.");
    }

    #[test]
    fn empty_list_is_malformed() {
        assert!(matches!(
            HuggingFaceClient::extract_completion(&json!([])),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn loading_body_with_estimate_is_model_loading() {
        let body = json!({
            "error": "Model mistralai/Mistral-7B-Instruct-v0.2 is currently loading",
            "estimated_time": 20.5,
        })
        .to_string();
        assert!(matches!(
            HuggingFaceClient::classify_error(503, &body),
            ProviderError::ModelLoading { estimated_secs: Some(secs) } if (secs - 20.5).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn loading_body_without_estimate_is_model_loading() {
        let body = json!({ "error": "model is loading" }).to_string();
        assert!(matches!(
            HuggingFaceClient::classify_error(503, &body),
            ProviderError::ModelLoading { estimated_secs: None }
        ));
    }

    #[test]
    fn other_error_bodies_keep_their_status() {
        let body = json!({ "error": "Authorization header is invalid" }).to_string();
        assert!(matches!(
            HuggingFaceClient::classify_error(401, &body),
            ProviderError::Status { status: 401, .. }
        ));
    }

    #[test]
    fn unparseable_body_keeps_its_status() {
        assert!(matches!(
            HuggingFaceClient::classify_error(502, "<html>bad gateway</html>"),
            ProviderError::Status { status: 502, .. }
        ));
    }
}
