//! Dispatcher that routes each request to exactly one provider client

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use super::factory::ProviderFactory;
use super::routing::{Provider, RoutingSpec};
use super::traits::{ModelClient, ModelProvider};
use super::types::ProviderError;
use crate::config::{ConfigError, GatewayConfig};
use crate::types::ChatMessage;

/// Holds one client per known provider and picks one per request.
///
/// There is no fallback slot: every [`Provider`] maps to its own client and
/// a failed call is returned as-is, never retried elsewhere.
#[derive(Clone)]
pub struct Dispatcher {
    default_spec: String,
    local: Arc<dyn ModelClient>,
    cloud_a: Arc<dyn ModelClient>,
    cloud_b: Arc<dyn ModelClient>,
}

impl Dispatcher {
    /// Each client must report the provider of the slot it fills.
    pub fn new(
        default_spec: impl Into<String>,
        local: Arc<dyn ModelClient>,
        cloud_a: Arc<dyn ModelClient>,
        cloud_b: Arc<dyn ModelClient>,
    ) -> Self {
        debug_assert_eq!(local.provider(), Provider::Local, "local slot");
        debug_assert_eq!(cloud_a.provider(), Provider::CloudA, "cloud-a slot");
        debug_assert_eq!(cloud_b.provider(), Provider::CloudB, "cloud-b slot");
        Self {
            default_spec: default_spec.into(),
            local,
            cloud_a,
            cloud_b,
        }
    }

    /// Build the real HTTP clients from configuration
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ConfigError> {
        let http = ProviderFactory::http_client(config.request_timeout)?;
        let client = |provider| ProviderFactory::create(provider, &config.providers, http.clone());

        Ok(Self::new(
            config.default_model.clone(),
            client(Provider::Local),
            client(Provider::CloudA),
            client(Provider::CloudB),
        ))
    }

    pub fn default_spec(&self) -> &str {
        &self.default_spec
    }

    pub fn client(&self, provider: Provider) -> &dyn ModelClient {
        match provider {
            Provider::Local => self.local.as_ref(),
            Provider::CloudA => self.cloud_a.as_ref(),
            Provider::CloudB => self.cloud_b.as_ref(),
        }
    }

    pub fn resolve(&self, model_spec: Option<&str>) -> Result<RoutingSpec, ProviderError> {
        RoutingSpec::parse(model_spec, &self.default_spec)
    }
}

#[async_trait]
impl ModelProvider for Dispatcher {
    async fn dispatch(
        &self,
        messages: &[ChatMessage],
        model_spec: Option<&str>,
    ) -> Result<String, ProviderError> {
        let route = self.resolve(model_spec).inspect_err(|err| {
            warn!(model_spec, %err, "Rejecting unroutable model spec");
        })?;

        info!(
            provider = %route.provider,
            model = route.model_name.as_str(),
            messages = messages.len(),
            "Dispatching chat request"
        );

        self.client(route.provider)
            .chat(&route.model_name, messages)
            .await
            .inspect_err(|err| {
                warn!(
                    provider = %route.provider,
                    kind = err.kind().as_str(),
                    upstream_status = err.upstream_status(),
                    "Provider call failed"
                );
            })
    }
}
