use crate::types::ChatMessage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Caller-supplied correlation token, echoed back unchanged
    pub thread_id: String,
    /// Full conversation history, oldest first
    pub messages: Vec<ChatMessage>,
    /// Routing spec such as `local/qwen2.5:7b`; the configured default when omitted
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub thread_id: String,
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Failure kind, e.g. `connection_failure`
    pub error: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}
