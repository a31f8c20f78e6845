pub mod app;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod provider;
pub mod server;

pub use app::GatewayConfig;
pub use error::ConfigError;
pub use provider::{ApiKey, CloudProviderConfig, LocalProviderConfig, ProvidersConfig};
pub use server::ServerSettings;
