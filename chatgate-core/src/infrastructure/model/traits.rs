//! Model traits

use super::routing::Provider;
use super::types::ProviderError;
use crate::types::ChatMessage;
use async_trait::async_trait;

/// Entry point used by the REST layer: resolve a routing spec and return one reply.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn dispatch(
        &self,
        messages: &[ChatMessage],
        model_spec: Option<&str>,
    ) -> Result<String, ProviderError>;
}

/// Trait for individual provider clients
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// The provider this client talks to
    fn provider(&self) -> Provider;

    /// Send the full history and return the complete reply text
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ProviderError>;
}
