//! Message adapters - convert between different API formats

use crate::types::{ChatMessage, MessageRole};
use serde_json::{Value, json};

/// Adapter for converting messages to different API formats
pub struct MessageAdapter;

impl MessageAdapter {
    /// Convert messages to OpenAI-style format
    /// Returns: [{"role": "...", "content": "..."}]
    pub fn to_openai_format(messages: &[ChatMessage]) -> Vec<Value> {
        messages
            .iter()
            .map(|msg| {
                json!({
                    "role": msg.role.as_str(),
                    "content": msg.content.clone()
                })
            })
            .collect()
    }

    /// Convert messages to Ollama format
    /// Same as OpenAI but simpler structure
    pub fn to_ollama_format(messages: &[ChatMessage]) -> Vec<Value> {
        Self::to_openai_format(messages)
    }

    /// Convert messages to Anthropic format
    /// Returns: (system_text, messages)
    ///
    /// System turns move to the top-level `system` field; every other turn
    /// keeps its relative position.
    pub fn to_anthropic_format(messages: &[ChatMessage]) -> (Option<String>, Vec<Value>) {
        let mut system_parts = Vec::new();
        let mut turns = Vec::new();

        for message in messages {
            match message.role {
                MessageRole::System => system_parts.push(message.content.as_str()),
                MessageRole::User | MessageRole::Assistant => turns.push(json!({
                    "role": message.role.as_str(),
                    "content": message.content.clone()
                })),
            }
        }

        let system = if system_parts.is_empty() {
            None
        } else {
            Some(system_parts.join("\n\n"))
        };

        (system, turns)
    }
}
