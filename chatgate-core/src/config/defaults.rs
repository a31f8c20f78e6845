pub const DEFAULT_MODEL_SPEC: &str = "local/qwen2.5:7b";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_BIND_PORT: u16 = 8000;
pub const DEFAULT_FRONTEND_DIR: &str = "frontend";
pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_CLOUD_A_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_CLOUD_B_ENDPOINT: &str = "https://api.anthropic.com";
pub const DEFAULT_CLOUD_A_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_CLOUD_B_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
