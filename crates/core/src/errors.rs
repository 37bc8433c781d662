use thiserror::Error;

/// Provider-reported states expected to resolve on retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransientKind {
    ModelLoading,
    RateLimited,
}

/// Errors that reach the caller of the quote endpoint.
///
/// Provider transport failures, timeouts, and malformed responses are absent
/// on purpose: they are recovered locally by the fallback bank and never
/// surface. Only bad input, explicitly transient provider states, and
/// unrecoverable configuration problems become caller-visible errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{hint}")]
    ProviderTransient { kind: TransientKind, hint: String },
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl QuoteError {
    pub fn missing_feeling() -> Self {
        Self::InvalidInput("Please provide how you're feeling".to_string())
    }

    pub fn model_loading(estimated_secs: Option<f64>) -> Self {
        let hint = match estimated_secs {
            Some(secs) => format!(
                "The quote model is still starting up. Please try again in about {secs:.0} seconds."
            ),
            None => "The quote model is still starting up. Please try again shortly.".to_string(),
        };
        Self::ProviderTransient { kind: TransientKind::ModelLoading, hint }
    }

    pub fn rate_limited() -> Self {
        Self::ProviderTransient {
            kind: TransientKind::RateLimited,
            hint: "The quote service is receiving too many requests. Please try again in a moment."
                .to_string(),
        }
    }

    /// HTTP-equivalent status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::ProviderTransient { kind: TransientKind::ModelLoading, .. } => 503,
            Self::ProviderTransient { kind: TransientKind::RateLimited, .. } => 429,
            Self::Configuration(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{QuoteError, TransientKind};

    #[test]
    fn missing_feeling_maps_to_bad_request() {
        let error = QuoteError::missing_feeling();
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.to_string(), "Please provide how you're feeling");
    }

    #[test]
    fn transient_states_map_to_retryable_statuses() {
        assert_eq!(QuoteError::model_loading(Some(20.0)).status_code(), 503);
        assert_eq!(QuoteError::rate_limited().status_code(), 429);
    }

    #[test]
    fn loading_hint_includes_the_estimate() {
        let error = QuoteError::model_loading(Some(19.6));
        assert!(matches!(
            &error,
            QuoteError::ProviderTransient { kind: TransientKind::ModelLoading, hint }
                if hint.contains("20 seconds")
        ));
    }

    #[test]
    fn configuration_failure_is_internal() {
        assert_eq!(QuoteError::Configuration("no credential".to_string()).status_code(), 500);
    }
}
