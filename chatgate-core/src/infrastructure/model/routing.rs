//! Provider identities and the routing-spec parser.
//!
//! A routing spec is a free-form `provider/model` string such as
//! `local/qwen2.5:7b` or `cloud-b/claude-3-5-haiku-latest`. The provider part
//! is matched case-insensitively against a closed set; the model part is
//! passed through untouched apart from trimming.

use super::types::ProviderError;
use std::fmt;

/// The closed set of backends the gateway can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Locally hosted Ollama-compatible server
    Local,
    /// OpenAI-compatible chat completions API
    CloudA,
    /// Anthropic-compatible messages API
    CloudB,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Local, Provider::CloudA, Provider::CloudB];

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Local => "local",
            Provider::CloudA => "cloud-a",
            Provider::CloudB => "cloud-b",
        }
    }

    /// Model used when a spec names only the provider.
    pub fn default_model(self) -> &'static str {
        match self {
            Provider::Local => "qwen2.5:7b",
            Provider::CloudA => "gpt-4o-mini",
            Provider::CloudB => "claude-3-5-sonnet-20241022",
        }
    }

    pub fn requires_api_key(self) -> bool {
        match self {
            Provider::Local => false,
            Provider::CloudA | Provider::CloudB => true,
        }
    }

    /// Case-insensitive lookup of a trimmed provider token.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved `(provider, model)` pair. Recomputed for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingSpec {
    pub provider: Provider,
    pub model_name: String,
}

impl RoutingSpec {
    pub fn new(provider: Provider, model_name: impl Into<String>) -> Self {
        Self {
            provider,
            model_name: model_name.into(),
        }
    }

    /// Parse a routing spec, substituting `default_spec` when `spec` is absent
    /// or blank.
    ///
    /// - `"provider"` uses the provider's built-in default model
    /// - `"provider/model"` uses `model` verbatim after trimming
    /// - an unknown provider fails with [`ProviderError::UnsupportedProvider`]
    ///   carrying the routing spec as given
    pub fn parse(spec: Option<&str>, default_spec: &str) -> Result<Self, ProviderError> {
        let raw = match spec {
            Some(value) if !value.trim().is_empty() => value,
            _ => default_spec,
        };

        let (provider_token, model_token) = match raw.split_once('/') {
            Some((provider, model)) => (provider, Some(model)),
            None => (raw, None),
        };

        let provider =
            Provider::from_name(provider_token).ok_or_else(|| ProviderError::unsupported(raw))?;

        let model_name = model_token
            .map(str::trim)
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| provider.default_model());

        Ok(Self::new(provider, model_name))
    }
}

impl fmt::Display for RoutingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.model_name)
    }
}
