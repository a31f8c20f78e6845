//! Application constants
//!
//! Single source of truth for paths and wire-level constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/gateway.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Chat endpoint of an Ollama-compatible local server
pub const LOCAL_CHAT_PATH: &str = "/api/chat";

/// Default chat completions path for OpenAI-compatible APIs
pub const DEFAULT_CLOUD_A_API_PATH: &str = "/v1/chat/completions";

/// Default messages path for Anthropic-compatible APIs
pub const DEFAULT_CLOUD_B_API_PATH: &str = "/v1/messages";

/// API version header value sent to Anthropic-compatible APIs
pub const CLOUD_B_API_VERSION: &str = "2023-06-01";

/// Upper bound on how much of an upstream error body is kept, in bytes
pub const MAX_ERROR_BODY_BYTES: usize = 2048;
