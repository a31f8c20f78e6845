use super::dto::ErrorResponse;
use crate::model::{ErrorKind, ProviderError};
use axum::Json;
use axum::http::StatusCode;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

/// HTTP status a provider failure is reported with.
///
/// Backend errors forward the upstream status when it is a 4xx or 5xx code.
pub fn status_for(err: &ProviderError) -> StatusCode {
    match err.kind() {
        ErrorKind::UnsupportedProvider => StatusCode::BAD_REQUEST,
        ErrorKind::Unconfigured | ErrorKind::MalformedResponse => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::ConnectionFailure => StatusCode::BAD_GATEWAY,
        ErrorKind::BackendError => err
            .upstream_status()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .filter(|status| status.is_client_error() || status.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY),
    }
}

pub(crate) fn provider_error(err: &ProviderError) -> ApiError {
    (
        status_for(err),
        Json(ErrorResponse {
            error: err.kind().as_str().to_string(),
            detail: err.detail(),
            upstream_status: err.upstream_status(),
        }),
    )
}

pub(crate) fn invalid_request(detail: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "invalid_request".to_string(),
            detail: detail.into(),
            upstream_status: None,
        }),
    )
}

pub(crate) fn internal_error(detail: impl Into<String>) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal_error".to_string(),
            detail: detail.into(),
            upstream_status: None,
        }),
    )
}
