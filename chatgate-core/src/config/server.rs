use super::defaults::{DEFAULT_BIND_PORT, DEFAULT_FRONTEND_DIR};
use super::error::ConfigError;
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// REST server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind: SocketAddr,
    /// Directory holding `index.html` and static assets. Routes are only
    /// mounted when the directory exists at startup.
    pub frontend_dir: Option<PathBuf>,
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_BIND_PORT)),
            frontend_dir: Some(PathBuf::from(DEFAULT_FRONTEND_DIR)),
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawServerSettings {
    bind: Option<String>,
    frontend_dir: Option<String>,
    #[serde(default)]
    cors_origins: Vec<String>,
}

impl TryFrom<RawServerSettings> for ServerSettings {
    type Error = ConfigError;

    fn try_from(raw: RawServerSettings) -> Result<Self, Self::Error> {
        let defaults = ServerSettings::default();

        let bind = match raw.bind {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBind { value, source })?,
            None => defaults.bind,
        };

        let frontend_dir = match raw.frontend_dir {
            Some(dir) if dir.trim().is_empty() => None,
            Some(dir) => Some(PathBuf::from(expand(&dir))),
            None => defaults.frontend_dir,
        };

        Ok(Self {
            bind,
            frontend_dir,
            cors_origins: raw.cors_origins,
        })
    }
}

fn expand(value: &str) -> String {
    shellexpand::full(value)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| value.to_string())
}
