//! Anthropic-compatible client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::config::CloudProviderConfig;
use crate::constants::CLOUD_B_API_VERSION;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::routing::Provider;
use crate::infrastructure::model::traits::ModelClient;
use crate::infrastructure::model::types::ProviderError;
use crate::types::ChatMessage;

/// Anthropic messages API client
#[derive(Clone)]
pub struct AnthropicClient {
    base: HttpClientBase,
    api_path: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn from_config(config: &CloudProviderConfig, http: Client) -> Self {
        Self {
            base: HttpClientBase::new(
                Provider::CloudB,
                config.endpoint.clone(),
                config.api_key.clone(),
                http,
            ),
            api_path: config.api_path.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    fn provider(&self) -> Provider {
        Provider::CloudB
    }

    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let url = self.base.build_url(&self.api_path);
        // The messages API only accepts user/assistant turns; system text
        // must travel in the top-level `system` field, so a mid-history
        // system turn loses its position on this wire format.
        let (system, turns) = MessageAdapter::to_anthropic_format(messages);

        let payload = AnthropicRequest {
            model,
            max_tokens: self.max_tokens,
            system,
            messages: turns,
            stream: false,
        };

        info!(
            provider = %self.base.provider,
            model,
            messages = messages.len(),
            "Sending request to Anthropic-compatible provider"
        );

        let response: AnthropicResponse = self
            .base
            .post_with_key_header(
                &url,
                &payload,
                "x-api-key",
                &[("anthropic-version", CLOUD_B_API_VERSION)],
            )
            .await?;
        debug!("Received response from Anthropic-compatible provider");

        let texts: Vec<String> = response
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect();

        let content = if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        };
        self.base.reply_text(content, "missing text block in content")
    }
}

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<serde_json::Value>,
    stream: bool,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<AnthropicBlock>,
}

#[derive(Deserialize)]
struct AnthropicBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}
