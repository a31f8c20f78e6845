use super::docs;
use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use crate::config::ServerSettings;
use crate::model::ModelProvider;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

/// Build the gateway router without binding a socket.
pub fn router<P>(provider: Arc<P>, settings: &ServerSettings) -> Router
where
    P: ModelProvider + 'static,
{
    let state = Arc::new(ServerState::new(provider));
    let api = Router::new()
        .route("/api/chat", post(routes::chat::chat_handler::<P>))
        .route("/api-doc/openapi.json", get(docs::openapi_json))
        .with_state(state);

    let app = routes::frontend::mount(api, settings.frontend_dir.as_deref());

    match cors_layer(&settings.cors_origins) {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

pub(super) async fn serve<P>(provider: Arc<P>, settings: &ServerSettings) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    let addr = settings.bind;
    info!(%addr, "Binding REST server");

    let app = router(provider, settings);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = origin.as_str(), "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any),
    )
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
