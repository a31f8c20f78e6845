//! # Provider Configuration
//!
//! Endpoints and credentials for the three backends the gateway can reach.
//!
//! | Provider | Wire format | Credential |
//! |----------|-------------|------------|
//! | `local` | Ollama `/api/chat` | none |
//! | `cloud-a` | OpenAI-compatible chat completions | bearer token |
//! | `cloud-b` | Anthropic-compatible messages | `x-api-key` |
//!
//! Credentials are never written in the TOML file itself. Each cloud provider
//! names the environment variable that holds its key:
//!
//! ```toml
//! [providers.cloud_a]
//! endpoint = "https://api.openai.com"
//! api_key_env = "OPENAI_API_KEY"
//! ```

use super::defaults::{
    DEFAULT_CLOUD_A_ENDPOINT, DEFAULT_CLOUD_A_KEY_ENV, DEFAULT_CLOUD_B_ENDPOINT,
    DEFAULT_CLOUD_B_KEY_ENV, DEFAULT_LOCAL_ENDPOINT, DEFAULT_MAX_TOKENS,
};
use crate::constants::{DEFAULT_CLOUD_A_API_PATH, DEFAULT_CLOUD_B_API_PATH};
use serde::Deserialize;
use std::env;
use std::fmt;
use tracing::{debug, warn};

/// Secret credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Local inference server (no credential)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalProviderConfig {
    pub endpoint: String,
}

impl Default for LocalProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LOCAL_ENDPOINT.to_string(),
        }
    }
}

/// Remote API that requires a credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudProviderConfig {
    pub endpoint: String,
    pub api_path: String,
    /// `None` when the named environment variable was unset or blank.
    pub api_key: Option<ApiKey>,
    /// Output token cap for APIs that require one.
    pub max_tokens: u32,
}

impl CloudProviderConfig {
    pub fn cloud_a_defaults() -> Self {
        Self {
            endpoint: DEFAULT_CLOUD_A_ENDPOINT.to_string(),
            api_path: DEFAULT_CLOUD_A_API_PATH.to_string(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn cloud_b_defaults() -> Self {
        Self {
            endpoint: DEFAULT_CLOUD_B_ENDPOINT.to_string(),
            api_path: DEFAULT_CLOUD_B_API_PATH.to_string(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(key));
        self
    }
}

/// Settings for every known provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvidersConfig {
    pub local: LocalProviderConfig,
    pub cloud_a: CloudProviderConfig,
    pub cloud_b: CloudProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            local: LocalProviderConfig::default(),
            cloud_a: CloudProviderConfig::cloud_a_defaults(),
            cloud_b: CloudProviderConfig::cloud_b_defaults(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawProviders {
    local: Option<RawLocalProvider>,
    cloud_a: Option<RawCloudProvider>,
    cloud_b: Option<RawCloudProvider>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawLocalProvider {
    endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawCloudProvider {
    endpoint: Option<String>,
    api_path: Option<String>,
    api_key_env: Option<String>,
    max_tokens: Option<u32>,
}

impl RawCloudProvider {
    fn build(self, provider: &str, defaults: CloudProviderConfig, key_env: &str) -> CloudProviderConfig {
        let api_key_env = self.api_key_env.unwrap_or_else(|| key_env.to_string());
        CloudProviderConfig {
            endpoint: self.endpoint.unwrap_or(defaults.endpoint),
            api_path: self.api_path.unwrap_or(defaults.api_path),
            api_key: resolve_api_key(provider, Some(&api_key_env)),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
        }
    }
}

impl From<RawProviders> for ProvidersConfig {
    fn from(raw: RawProviders) -> Self {
        let local = LocalProviderConfig {
            endpoint: raw
                .local
                .and_then(|l| l.endpoint)
                .unwrap_or_else(|| DEFAULT_LOCAL_ENDPOINT.to_string()),
        };
        let cloud_a = raw.cloud_a.unwrap_or_default().build(
            "cloud-a",
            CloudProviderConfig::cloud_a_defaults(),
            DEFAULT_CLOUD_A_KEY_ENV,
        );
        let cloud_b = raw.cloud_b.unwrap_or_default().build(
            "cloud-b",
            CloudProviderConfig::cloud_b_defaults(),
            DEFAULT_CLOUD_B_KEY_ENV,
        );

        Self {
            local,
            cloud_a,
            cloud_b,
        }
    }
}

/// Resolve API key from environment variable
pub fn resolve_api_key(provider: &str, env_name: Option<&str>) -> Option<ApiKey> {
    let raw = env_name.map(str::trim).filter(|name| !name.is_empty())?;
    match env::var(raw) {
        Ok(value) if !value.trim().is_empty() => {
            debug!(provider, env_var = raw, "Resolved API key from environment");
            Some(ApiKey::new(value.trim()))
        }
        Ok(_) => {
            warn!(provider, env_var = raw, "API key environment variable is blank");
            None
        }
        Err(err) => {
            warn!(
                provider,
                env_var = raw,
                %err,
                "API key environment variable is not set"
            );
            None
        }
    }
}
