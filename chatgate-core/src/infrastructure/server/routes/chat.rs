use super::super::dto::{ChatRequest, ChatResponse, ErrorResponse};
use super::super::error::{ApiError, internal_error, invalid_request, provider_error};
use super::super::state::ServerState;
use crate::model::ModelProvider;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;
use tracing::{error, info, warn};

#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply produced by the selected provider", body = ChatResponse),
        (status = 400, description = "Invalid request or unsupported provider", body = ErrorResponse),
        (status = 500, description = "Provider unconfigured, reply unusable, or dispatch task failed", body = ErrorResponse),
        (status = 502, description = "Provider could not be reached", body = ErrorResponse)
    )
)]
pub async fn chat_handler<P: ModelProvider + 'static>(
    State(state): State<Arc<ServerState<P>>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(ChatRequest {
        thread_id,
        messages,
        model,
    }) = payload.map_err(|rejection| {
        warn!(%rejection, "Rejecting malformed /api/chat body");
        invalid_request(rejection.body_text())
    })?;

    info!(
        thread_id = thread_id.as_str(),
        messages = messages.len(),
        model = model.as_deref(),
        "Received /api/chat request"
    );

    if messages.is_empty() {
        warn!(thread_id = thread_id.as_str(), "Rejecting /api/chat request without messages");
        return Err(invalid_request("messages cannot be empty"));
    }

    // Detached so a caller disconnect does not abort the upstream call.
    let provider = state.provider();
    let dispatch =
        tokio::spawn(async move { provider.dispatch(&messages, model.as_deref()).await });
    let outcome = match dispatch.await {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(thread_id = thread_id.as_str(), %err, "Dispatch task failed");
            return Err(internal_error(format!("dispatch task failed: {err}")));
        }
    };

    match outcome {
        Ok(reply) => {
            info!(
                thread_id = thread_id.as_str(),
                reply_len = reply.len(),
                "Chat request completed successfully"
            );
            Ok(Json(ChatResponse { thread_id, reply }))
        }
        Err(err) => {
            error!(thread_id = thread_id.as_str(), %err, "Chat request failed");
            Err(provider_error(&err))
        }
    }
}
