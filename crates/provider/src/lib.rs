//! Pluggable text-generation providers.
//!
//! The source system grew one near-duplicate handler per upstream API; here
//! the per-provider differences (endpoint, request shape, response shape,
//! error signalling) live behind a single `QuoteGenerator` trait so the
//! request handler is written once.
//!
//! Two concrete backends are supported:
//! - `GroqClient` — OpenAI-compatible chat-completion shape
//! - `HuggingFaceClient` — Inference API text-completion shape
//!
//! Both make exactly one bounded outbound call per request; retry behavior
//! belongs to the caller (who prefers the fallback bank over retrying).

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use uplift_core::config::{ProviderBackend, ProviderConfig};

pub mod groq;
pub mod hugging_face;
mod prompt;

pub use groq::GroqClient;
pub use hugging_face::HuggingFaceClient;

/// How a provider call can fail.
///
/// `ModelLoading` and `RateLimited` are the only variants surfaced to the
/// end caller; everything else is recovered locally with a fallback quote.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed provider response: {0}")]
    Malformed(String),
    #[error("model is still loading")]
    ModelLoading { estimated_secs: Option<f64> },
    #[error("provider rate limit exceeded")]
    RateLimited,
}

impl ProviderError {
    /// True for provider-reported states that are worth retrying later and
    /// are therefore surfaced to the caller instead of masked by a fallback.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ModelLoading { .. } | Self::RateLimited)
    }
}

/// One call: a mood string in, a raw (unsanitized) completion out.
#[async_trait]
pub trait QuoteGenerator: Send + Sync {
    async fn generate(&self, feeling: &str) -> Result<String, ProviderError>;
    fn name(&self) -> &'static str;
}

/// Build the configured generator, or `None` when no credential is present.
/// Policy for the `None` case (serve fallback quotes vs refuse to start) is
/// the server's decision, not this crate's.
pub fn build_generator(
    config: &ProviderConfig,
) -> Result<Option<Arc<dyn QuoteGenerator>>, ProviderError> {
    let Some(api_key) = configured_key(config) else {
        return Ok(None);
    };

    let generator: Arc<dyn QuoteGenerator> = match config.backend {
        ProviderBackend::Groq => Arc::new(GroqClient::new(config, api_key)?),
        ProviderBackend::HuggingFace => Arc::new(HuggingFaceClient::new(config, api_key)?),
    };
    Ok(Some(generator))
}

fn configured_key(config: &ProviderConfig) -> Option<SecretString> {
    config.api_key.as_ref().filter(|key| !key.expose_secret().trim().is_empty()).cloned()
}
