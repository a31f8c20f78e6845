//! OpenAI-compatible client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::config::CloudProviderConfig;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::routing::Provider;
use crate::infrastructure::model::traits::ModelClient;
use crate::infrastructure::model::types::ProviderError;
use crate::types::ChatMessage;

/// OpenAI-compatible client (OpenAI, Mistral, Groq, vLLM, etc.)
#[derive(Clone)]
pub struct OpenAIClient {
    base: HttpClientBase,
    api_path: String,
}

impl OpenAIClient {
    pub fn from_config(config: &CloudProviderConfig, http: Client) -> Self {
        Self {
            base: HttpClientBase::new(
                Provider::CloudA,
                config.endpoint.clone(),
                config.api_key.clone(),
                http,
            ),
            api_path: config.api_path.clone(),
        }
    }
}

#[async_trait]
impl ModelClient for OpenAIClient {
    fn provider(&self) -> Provider {
        Provider::CloudA
    }

    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let url = self.base.build_url(&self.api_path);

        let payload = OpenAIRequest {
            model,
            messages: MessageAdapter::to_openai_format(messages),
            stream: false,
        };

        info!(
            provider = %self.base.provider,
            model,
            messages = messages.len(),
            "Sending request to OpenAI-compatible provider"
        );

        let response: OpenAIResponse = self.base.post_with_bearer(&url, &payload).await?;
        debug!("Received response from OpenAI-compatible provider");

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content);

        self.base
            .reply_text(content, "missing choices[0].message.content")
    }
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: Vec<serde_json::Value>,
    stream: bool,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    #[serde(default)]
    message: Option<OpenAIMessage>,
}

#[derive(Deserialize)]
struct OpenAIMessage {
    #[serde(default)]
    content: Option<String>,
}
