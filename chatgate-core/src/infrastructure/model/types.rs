//! Normalized failure taxonomy shared by every provider

use super::routing::Provider;
use crate::constants::MAX_ERROR_BODY_BYTES;
use std::error::Error as _;
use thiserror::Error;

/// Coarse failure category, stable across providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ConnectionFailure,
    BackendError,
    MalformedResponse,
    Unconfigured,
    UnsupportedProvider,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ConnectionFailure => "connection_failure",
            ErrorKind::BackendError => "backend_error",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::Unconfigured => "unconfigured",
            ErrorKind::UnsupportedProvider => "unsupported_provider",
        }
    }
}

/// Provider errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("unsupported provider in model spec '{spec}'")]
    UnsupportedProvider { spec: String },
    #[error("provider '{provider}' is not configured: {reason}")]
    Unconfigured { provider: Provider, reason: String },
    #[error("failed to reach provider '{provider}': {detail}")]
    ConnectionFailure { provider: Provider, detail: String },
    #[error("provider '{provider}' returned HTTP {status}: {body}")]
    BackendError {
        provider: Provider,
        status: u16,
        body: String,
    },
    #[error("provider '{provider}' returned an unusable response: {reason}")]
    MalformedResponse { provider: Provider, reason: String },
}

impl ProviderError {
    pub fn unsupported(spec: impl Into<String>) -> Self {
        Self::UnsupportedProvider { spec: spec.into() }
    }

    pub fn missing_api_key(provider: Provider) -> Self {
        Self::Unconfigured {
            provider,
            reason: "no API key is configured".to_string(),
        }
    }

    /// Transport failure. The detail keeps the whole source chain so
    /// "connection refused" or "operation timed out" survive.
    pub fn connection_failure(provider: Provider, source: &reqwest::Error) -> Self {
        let mut detail = source.to_string();
        let mut cause = source.source();
        while let Some(err) = cause {
            detail.push_str(": ");
            detail.push_str(&err.to_string());
            cause = err.source();
        }
        Self::ConnectionFailure { provider, detail }
    }

    pub fn backend_error(provider: Provider, status: u16, body: &str) -> Self {
        Self::BackendError {
            provider,
            status,
            body: truncate_body(body, MAX_ERROR_BODY_BYTES).to_string(),
        }
    }

    pub fn malformed_response(provider: Provider, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ProviderError::UnsupportedProvider { .. } => ErrorKind::UnsupportedProvider,
            ProviderError::Unconfigured { .. } => ErrorKind::Unconfigured,
            ProviderError::ConnectionFailure { .. } => ErrorKind::ConnectionFailure,
            ProviderError::BackendError { .. } => ErrorKind::BackendError,
            ProviderError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }

    /// Human-readable diagnosis. For backend errors this is the upstream body.
    pub fn detail(&self) -> String {
        match self {
            ProviderError::BackendError { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }

    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ProviderError::BackendError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Provider the failure came from, if one had been selected.
    pub fn provider(&self) -> Option<Provider> {
        match self {
            ProviderError::UnsupportedProvider { .. } => None,
            ProviderError::Unconfigured { provider, .. }
            | ProviderError::ConnectionFailure { provider, .. }
            | ProviderError::BackendError { provider, .. }
            | ProviderError::MalformedResponse { provider, .. } => Some(*provider),
        }
    }
}

/// Longest prefix of `body` that fits in `max` bytes without splitting a char.
pub(crate) fn truncate_body(body: &str, max: usize) -> &str {
    if body.len() <= max {
        return body;
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
