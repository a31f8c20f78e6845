//! Provider factory - creates clients from config

use super::clients::{AnthropicClient, OllamaClient, OpenAIClient};
use super::routing::Provider;
use super::traits::ModelClient;
use crate::config::{ConfigError, ProvidersConfig};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Factory for creating model clients from provider config.
pub struct ProviderFactory;

impl ProviderFactory {
    /// HTTP client shared by every provider; `timeout` bounds each call.
    pub fn http_client(timeout: Duration) -> Result<Client, ConfigError> {
        Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)
    }

    /// Creates the client for `provider`.
    ///
    /// - `local` → Ollama format
    /// - `cloud-a` → OpenAI-compatible format
    /// - `cloud-b` → Anthropic format
    pub fn create(provider: Provider, config: &ProvidersConfig, http: Client) -> Arc<dyn ModelClient> {
        debug!(%provider, "Creating model client");
        match provider {
            Provider::Local => Arc::new(OllamaClient::from_config(&config.local, http)),
            Provider::CloudA => Arc::new(OpenAIClient::from_config(&config.cloud_a, http)),
            Provider::CloudB => Arc::new(AnthropicClient::from_config(&config.cloud_b, http)),
        }
    }
}
