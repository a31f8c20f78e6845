//! Model clients

mod anthropic;
mod base;
mod ollama;
mod openai;

pub use anthropic::AnthropicClient;
pub use base::HttpClientBase;
pub use ollama::OllamaClient;
pub use openai::OpenAIClient;
