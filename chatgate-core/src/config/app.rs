use super::defaults::{DEFAULT_MODEL_SPEC, DEFAULT_TIMEOUT_SECS};
use super::error::ConfigError;
use super::provider::ProvidersConfig;
use super::server::ServerSettings;
use crate::model::RoutingSpec;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Gateway configuration. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Routing spec used when a request names no model, e.g. `local/qwen2.5:7b`.
    pub default_model: String,
    pub request_timeout: Duration,
    pub server: ServerSettings,
    pub providers: ProvidersConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL_SPEC.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            server: ServerSettings::default(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a file path (or the default path if None).
    /// The result is not validated yet; apply overrides, then call [`Self::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    pub fn with_default_model(mut self, spec: impl Into<String>) -> Self {
        self.default_model = spec.into();
        self
    }

    pub fn with_local_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.providers.local.endpoint = endpoint.into();
        self
    }

    pub fn with_bind(mut self, addr: SocketAddr) -> Self {
        self.server.bind = addr;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Reject settings that would only fail later, per request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        let spec = self.default_model.trim();
        if spec.is_empty() {
            return Err(ConfigError::InvalidDefaultModel {
                spec: self.default_model.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        RoutingSpec::parse(Some(spec), spec).map_err(|err| ConfigError::InvalidDefaultModel {
            spec: self.default_model.clone(),
            reason: err.to_string(),
        })?;

        Ok(())
    }
}
