//! The quote endpoint.
//!
//! `POST /api/quote` takes `{"feeling": string}` and always answers with
//! either `200 {"quote": ...}` or `{"error": ...}` under 400/429/500/503.
//!
//! Failure policy: transport failures, timeouts, unexpected statuses, and
//! malformed or unacceptable completions all degrade to the curated
//! fallback bank and still return 200. Only two provider states are
//! reported to the caller, because retrying them later actually helps:
//! a model that is still loading (503) and an upstream rate limit (429).

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uplift_core::errors::QuoteError;
use uplift_core::{fallback, sanitize};
use uplift_provider::{ProviderError, QuoteGenerator};
use uuid::Uuid;

/// How quote requests are answered, fixed at bootstrap.
#[derive(Clone)]
pub enum Generation {
    /// A provider client is configured; generation is attempted first.
    Generative(Arc<dyn QuoteGenerator>),
    /// No credential, tolerant policy: every request uses the bank.
    FallbackOnly,
    /// No credential, strict policy: quote requests fail with 500.
    MissingCredential,
}

impl Generation {
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Generative(_) => "generative",
            Self::FallbackOnly => "fallback-only",
            Self::MissingCredential => "misconfigured",
        }
    }
}

#[derive(Clone)]
pub struct QuoteState {
    generation: Generation,
}

impl QuoteState {
    pub fn new(generation: Generation) -> Self {
        Self { generation }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub feeling: String,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: String,
}

#[derive(Debug, Serialize)]
pub struct QuoteApiError {
    pub error: String,
}

pub fn router(state: QuoteState) -> Router {
    Router::new().route("/api/quote", post(generate_quote)).with_state(state)
}

pub async fn generate_quote(
    State(state): State<QuoteState>,
    Json(body): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, (StatusCode, Json<QuoteApiError>)> {
    let correlation_id = Uuid::new_v4().simple().to_string();

    let feeling = body.feeling.trim();
    if feeling.is_empty() {
        return Err(reply_error(QuoteError::missing_feeling()));
    }

    let generator = match &state.generation {
        Generation::Generative(generator) => generator,
        Generation::FallbackOnly => {
            info!(
                event_name = "quote.fallback.no_provider",
                correlation_id = %correlation_id,
                category = fallback::classify(feeling).tag,
                "no provider configured; answering from the fallback bank"
            );
            return Ok(fallback_response(feeling));
        }
        Generation::MissingCredential => {
            return Err(reply_error(QuoteError::Configuration(
                "text-generation provider credential is not configured".to_string(),
            )));
        }
    };

    match generator.generate(feeling).await {
        Ok(raw) => {
            let cleaned = sanitize::clean(&raw);
            if sanitize::is_acceptable(&cleaned) {
                info!(
                    event_name = "quote.generated",
                    correlation_id = %correlation_id,
                    provider = generator.name(),
                    quote_chars = cleaned.chars().count(),
                    "generated quote accepted"
                );
                Ok(Json(QuoteResponse { quote: cleaned }))
            } else {
                warn!(
                    event_name = "quote.fallback.unacceptable",
                    correlation_id = %correlation_id,
                    provider = generator.name(),
                    quote_chars = cleaned.chars().count(),
                    "generated text failed the acceptability check; answering from the fallback bank"
                );
                Ok(fallback_response(feeling))
            }
        }
        Err(ProviderError::ModelLoading { estimated_secs }) => {
            warn!(
                event_name = "quote.provider.model_loading",
                correlation_id = %correlation_id,
                provider = generator.name(),
                estimated_secs = estimated_secs.unwrap_or(0.0),
                "provider model is still loading; reporting transient state to caller"
            );
            Err(reply_error(QuoteError::model_loading(estimated_secs)))
        }
        Err(ProviderError::RateLimited) => {
            warn!(
                event_name = "quote.provider.rate_limited",
                correlation_id = %correlation_id,
                provider = generator.name(),
                "provider rate limit hit; reporting transient state to caller"
            );
            Err(reply_error(QuoteError::rate_limited()))
        }
        Err(error) => {
            warn!(
                event_name = "quote.fallback.provider_error",
                correlation_id = %correlation_id,
                provider = generator.name(),
                error = %error,
                "provider call failed; answering from the fallback bank"
            );
            Ok(fallback_response(feeling))
        }
    }
}

fn fallback_response(feeling: &str) -> Json<QuoteResponse> {
    Json(QuoteResponse { quote: fallback::select_fallback(feeling).to_string() })
}

fn reply_error(error: QuoteError) -> (StatusCode, Json<QuoteApiError>) {
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(QuoteApiError { error: error.to_string() }))
}
