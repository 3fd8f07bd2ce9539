use std::sync::OnceLock;

pub const BASE_URL_VAR: &str = "BOOK_API_BASE_URL";
pub const HEALTH_URL_VAR: &str = "BOOK_API_HEALTH_URL";

pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:8000/api/v1";
pub const DEFAULT_HEALTH_URL: &str = "http://0.0.0.0:8000/api/health";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub health_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, health_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(&base_url.into()),
            health_url: normalize(&health_url.into()),
        }
    }

    /// Reads the backend location from the environment, falling back to the
    /// local defaults for unset or blank variables.
    pub fn from_env() -> Self {
        Self::new(
            env_or(BASE_URL_VAR, DEFAULT_BASE_URL),
            env_or(HEALTH_URL_VAR, DEFAULT_HEALTH_URL),
        )
    }

    /// Config whose health probe is `{base_url}/health`.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        let base_url = normalize(&base_url.into());
        let health_url = format!("{}/health", base_url);
        Self {
            base_url,
            health_url,
        }
    }
}

/// Base URL resolved once per process.
pub fn base_url() -> &'static str {
    &global().base_url
}

pub fn global() -> &'static ClientConfig {
    static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG.get_or_init(ClientConfig::from_env)
}

fn env_or(var: &str, default: &str) -> String {
    value_or(std::env::var(var).ok(), default)
}

fn value_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
