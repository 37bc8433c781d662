use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub backend: ProviderBackend,
    pub api_key: Option<SecretString>,
    pub base_url: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_tokens: u32,
    pub on_missing_credential: MissingCredentialPolicy,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub graceful_shutdown_secs: u64,
    pub static_dir: String,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderBackend {
    Groq,
    HuggingFace,
}

/// What to do when no provider credential is configured: serve curated
/// fallback quotes only, or refuse to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCredentialPolicy {
    Fallback,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub provider_backend: Option<ProviderBackend>,
    pub provider_api_key: Option<String>,
    pub provider_model: Option<String>,
    pub on_missing_credential: Option<MissingCredentialPolicy>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                backend: ProviderBackend::Groq,
                api_key: None,
                base_url: None,
                model: "llama-3.1-8b-instant".to_string(),
                timeout_secs: 15,
                temperature: 0.85,
                max_tokens: 100,
                on_missing_credential: MissingCredentialPolicy::Fallback,
            },
            server: ServerConfig {
                bind_address: "127.0.0.1".to_string(),
                port: 8080,
                graceful_shutdown_secs: 15,
                static_dir: "static".to_string(),
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

fn secret_value(value: String) -> SecretString {
    value.into()
}

impl std::str::FromStr for ProviderBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "hugging_face" | "huggingface" => Ok(Self::HuggingFace),
            other => Err(ConfigError::Validation(format!(
                "unsupported provider backend `{other}` (expected groq|hugging_face)"
            ))),
        }
    }
}

impl std::str::FromStr for MissingCredentialPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::Validation(format!(
                "unsupported missing-credential policy `{other}` (expected fallback|error)"
            ))),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("uplift.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    /// True when a non-blank provider credential is configured.
    pub fn has_credential(&self) -> bool {
        self.provider
            .api_key
            .as_ref()
            .map(|key| !key.expose_secret().trim().is_empty())
            .unwrap_or(false)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(provider) = patch.provider {
            if let Some(backend) = provider.backend {
                self.provider.backend = backend;
            }
            if let Some(api_key_value) = provider.api_key {
                self.provider.api_key = Some(secret_value(api_key_value));
            }
            if let Some(base_url) = provider.base_url {
                self.provider.base_url = Some(base_url);
            }
            if let Some(model) = provider.model {
                self.provider.model = model;
            }
            if let Some(timeout_secs) = provider.timeout_secs {
                self.provider.timeout_secs = timeout_secs;
            }
            if let Some(temperature) = provider.temperature {
                self.provider.temperature = temperature;
            }
            if let Some(max_tokens) = provider.max_tokens {
                self.provider.max_tokens = max_tokens;
            }
            if let Some(policy) = provider.on_missing_credential {
                self.provider.on_missing_credential = policy;
            }
        }

        if let Some(server) = patch.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(graceful_shutdown_secs) = server.graceful_shutdown_secs {
                self.server.graceful_shutdown_secs = graceful_shutdown_secs;
            }
            if let Some(static_dir) = server.static_dir {
                self.server.static_dir = static_dir;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("UPLIFT_PROVIDER_BACKEND") {
            self.provider.backend = value.parse()?;
        }
        if let Some(value) = read_env("UPLIFT_PROVIDER_API_KEY") {
            self.provider.api_key = Some(secret_value(value));
        }
        if let Some(value) = read_env("UPLIFT_PROVIDER_BASE_URL") {
            self.provider.base_url = Some(value);
        }
        if let Some(value) = read_env("UPLIFT_PROVIDER_MODEL") {
            self.provider.model = value;
        }
        if let Some(value) = read_env("UPLIFT_PROVIDER_TIMEOUT_SECS") {
            self.provider.timeout_secs = parse_u64("UPLIFT_PROVIDER_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = read_env("UPLIFT_PROVIDER_TEMPERATURE") {
            self.provider.temperature = parse_f32("UPLIFT_PROVIDER_TEMPERATURE", &value)?;
        }
        if let Some(value) = read_env("UPLIFT_PROVIDER_MAX_TOKENS") {
            self.provider.max_tokens = parse_u32("UPLIFT_PROVIDER_MAX_TOKENS", &value)?;
        }
        if let Some(value) = read_env("UPLIFT_PROVIDER_ON_MISSING_CREDENTIAL") {
            self.provider.on_missing_credential = value.parse()?;
        }

        if let Some(value) = read_env("UPLIFT_SERVER_BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = read_env("UPLIFT_SERVER_PORT") {
            self.server.port = parse_u16("UPLIFT_SERVER_PORT", &value)?;
        }
        if let Some(value) = read_env("UPLIFT_SERVER_GRACEFUL_SHUTDOWN_SECS") {
            self.server.graceful_shutdown_secs =
                parse_u64("UPLIFT_SERVER_GRACEFUL_SHUTDOWN_SECS", &value)?;
        }
        if let Some(value) = read_env("UPLIFT_SERVER_STATIC_DIR") {
            self.server.static_dir = value;
        }

        let log_level = read_env("UPLIFT_LOGGING_LEVEL").or_else(|| read_env("UPLIFT_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("UPLIFT_LOGGING_FORMAT").or_else(|| read_env("UPLIFT_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(backend) = overrides.provider_backend {
            self.provider.backend = backend;
        }
        if let Some(api_key) = overrides.provider_api_key {
            self.provider.api_key = Some(secret_value(api_key));
        }
        if let Some(model) = overrides.provider_model {
            self.provider.model = model;
        }
        if let Some(policy) = overrides.on_missing_credential {
            self.provider.on_missing_credential = policy;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_provider(&self.provider)?;
        validate_server(&self.server)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("uplift.toml"), PathBuf::from("config/uplift.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_provider(provider: &ProviderConfig) -> Result<(), ConfigError> {
    if provider.timeout_secs == 0 || provider.timeout_secs > 300 {
        return Err(ConfigError::Validation(
            "provider.timeout_secs must be in range 1..=300".to_string(),
        ));
    }

    if !(0.0..=2.0).contains(&provider.temperature) {
        return Err(ConfigError::Validation(
            "provider.temperature must be in range 0.0..=2.0".to_string(),
        ));
    }

    if provider.max_tokens == 0 || provider.max_tokens > 1024 {
        return Err(ConfigError::Validation(
            "provider.max_tokens must be in range 1..=1024".to_string(),
        ));
    }

    if provider.model.trim().is_empty() {
        return Err(ConfigError::Validation("provider.model must not be empty".to_string()));
    }

    if let Some(base_url) = &provider.base_url {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "provider.base_url must start with http:// or https://".to_string(),
            ));
        }
    }

    Ok(())
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.port == 0 {
        return Err(ConfigError::Validation("server.port must be greater than zero".to_string()));
    }

    if server.graceful_shutdown_secs == 0 {
        return Err(ConfigError::Validation(
            "server.graceful_shutdown_secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u16(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse::<u32>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_f32(key: &str, value: &str) -> Result<f32, ConfigError> {
    value.parse::<f32>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    provider: Option<ProviderPatch>,
    server: Option<ServerPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderPatch {
    backend: Option<ProviderBackend>,
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    on_missing_credential: Option<MissingCredentialPolicy>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerPatch {
    bind_address: Option<String>,
    port: Option<u16>,
    graceful_shutdown_secs: Option<u64>,
    static_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
