use super::app::GatewayConfig;
use super::defaults::{DEFAULT_MODEL_SPEC, DEFAULT_TIMEOUT_SECS};
use super::error::ConfigError;
use super::provider::{ProvidersConfig, RawProviders};
use super::server::{RawServerSettings, ServerSettings};
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    default_model: Option<String>,
    request_timeout_secs: Option<u64>,
    #[serde(default)]
    server: RawServerSettings,
    #[serde(default)]
    providers: RawProviders,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load configuration without validating it.
///
/// Callers apply their overrides and then call [`GatewayConfig::validate`].
/// An explicit path must exist. Without one, `config/gateway.toml` is used
/// when present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    ensure_env_loaded();

    let raw = match path {
        Some(path) => read_config(path)?,
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)?
            } else {
                info!(path = CONFIG_PATH, "No configuration file found, using defaults");
                RawConfig::default()
            }
        }
    };

    build(raw)
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading gateway configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn build(raw: RawConfig) -> Result<GatewayConfig, ConfigError> {
    Ok(GatewayConfig {
        default_model: raw
            .default_model
            .unwrap_or_else(|| DEFAULT_MODEL_SPEC.to_string()),
        request_timeout: Duration::from_secs(
            raw.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
        server: ServerSettings::try_from(raw.server)?,
        providers: ProvidersConfig::from(raw.providers),
    })
}
