use std::fmt;

use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

pub use figment::Error as ConfigError;

pub type AppConfig = RelayConfig;

pub const CONFIG_FILE_PATH: &str = "config/relay.json";
pub const ENV_PREFIX: &str = "RELAY_SERVICE_";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_provider_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Name of the environment variable holding the bearer credential.
    #[serde(default = "default_credential_env")]
    pub credential_env: String,
    #[serde(skip)]
    pub api_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_provider_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            credential_env: default_credential_env(),
            api_token: None,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("credential_env", &self.credential_env)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

/// Layers defaults, `config/relay.json` and `RELAY_SERVICE_*` variables, then
/// reads the provider credential from the configured environment variable.
pub fn load_config() -> Result<RelayConfig, ConfigError> {
    let mut config: RelayConfig = Figment::from(Serialized::defaults(RelayConfig::default()))
        .merge(Json::file(CONFIG_FILE_PATH))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()?;

    config.provider.api_token = std::env::var(&config.provider.credential_env)
        .ok()
        .filter(|token| !token.is_empty());
    Ok(config)
}

pub fn setup_logging(config: &RelayConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.logging.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    // Fails when a global subscriber is already set; keep whichever came first.
    match installed {
        Ok(()) => tracing::debug!(
            level = %config.logging.level,
            json = config.logging.json,
            "logging initialized"
        ),
        Err(err) => eprintln!("relay logging: subscriber not installed: {err}"),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    100 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_provider_endpoint() -> String {
    "https://api-inference.huggingface.co/models/openai/whisper-large-v3".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_credential_env() -> String {
    "HF_API_TOKEN".to_string()
}

fn default_allowed_extensions() -> Vec<String> {
    ["mp3", "wav", "m4a", "flac", "mp4", "mov", "avi", "mkv"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
