//! Ollama client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::config::LocalProviderConfig;
use crate::constants::LOCAL_CHAT_PATH;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::routing::Provider;
use crate::infrastructure::model::traits::ModelClient;
use crate::infrastructure::model::types::ProviderError;
use crate::types::ChatMessage;

/// Ollama client for local LLM
#[derive(Clone)]
pub struct OllamaClient {
    base: HttpClientBase,
}

impl OllamaClient {
    /// Creates client from provider config.
    pub fn from_config(config: &LocalProviderConfig, http: Client) -> Self {
        Self {
            base: HttpClientBase::new(Provider::Local, config.endpoint.clone(), None, http),
        }
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    fn provider(&self) -> Provider {
        Provider::Local
    }

    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let url = self.base.build_url(LOCAL_CHAT_PATH);

        let payload = OllamaRequest {
            model,
            messages: MessageAdapter::to_ollama_format(messages),
            stream: false,
        };

        info!(
            provider = %self.base.provider,
            model,
            messages = messages.len(),
            "Sending request to Ollama"
        );

        let response: OllamaResponse = self.base.post_no_auth(&url, &payload).await?;
        debug!("Received response from Ollama");

        let content = response.message.and_then(|m| m.content);
        self.base.reply_text(content, "missing message.content")
    }
}

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: Vec<serde_json::Value>,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    message: Option<OllamaMessage>,
}

#[derive(Deserialize)]
struct OllamaMessage {
    #[serde(default)]
    content: Option<String>,
}
