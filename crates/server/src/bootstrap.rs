use axum::Router;
use thiserror::Error;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};
use uplift_core::config::{AppConfig, ConfigError, MissingCredentialPolicy};
use uplift_provider::{build_generator, ProviderError};

use crate::quote::{Generation, QuoteState};

pub struct Application {
    pub config: AppConfig,
    pub generation: Generation,
}

impl Application {
    pub fn generation_mode(&self) -> &'static str {
        self.generation.mode()
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("provider client construction failed: {0}")]
    Provider(#[from] ProviderError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let generation = match build_generator(&config.provider)? {
        Some(generator) => {
            info!(
                event_name = "system.bootstrap.provider_ready",
                correlation_id = "bootstrap",
                provider = generator.name(),
                model = %config.provider.model,
                "text-generation provider client ready"
            );
            Generation::Generative(generator)
        }
        None if config.provider.on_missing_credential == MissingCredentialPolicy::Error => {
            // Strict deployments keep serving the page but answer quote
            // requests with a configuration error until the operator fixes
            // the credential.
            error!(
                event_name = "system.bootstrap.missing_credential",
                correlation_id = "bootstrap",
                "no provider credential configured and policy is `error`; quote requests will fail"
            );
            Generation::MissingCredential
        }
        None => {
            warn!(
                event_name = "system.bootstrap.fallback_only",
                correlation_id = "bootstrap",
                "no provider credential configured; serving curated fallback quotes only"
            );
            Generation::FallbackOnly
        }
    };

    Ok(Application { config, generation })
}

pub fn router(app: Application) -> Router {
    Router::new()
        .merge(crate::quote::router(QuoteState::new(app.generation.clone())))
        .merge(crate::health::router(app.generation.mode()))
        .fallback_service(ServeDir::new(app.config.server.static_dir))
}

#[cfg(test)]
mod tests {
    use uplift_core::config::{AppConfig, MissingCredentialPolicy};

    use super::bootstrap_with_config;

    #[test]
    fn missing_credential_under_fallback_policy_boots_fallback_only() {
        let config = AppConfig::default();
        let app = bootstrap_with_config(config).expect("bootstrap should succeed");
        assert_eq!(app.generation_mode(), "fallback-only");
    }

    #[test]
    fn missing_credential_under_strict_policy_boots_misconfigured() {
        let mut config = AppConfig::default();
        config.provider.on_missing_credential = MissingCredentialPolicy::Error;
        let app = bootstrap_with_config(config).expect("bootstrap should still succeed");
        assert_eq!(app.generation_mode(), "misconfigured");
    }

    #[test]
    fn credential_boots_generative_mode() {
        let mut config = AppConfig::default();
        config.provider.api_key = Some("gsk-test".to_string().into());
        let app = bootstrap_with_config(config).expect("bootstrap should succeed");
        assert_eq!(app.generation_mode(), "generative");
    }
}
