use super::dto::{ChatRequest, ChatResponse, ErrorResponse};
use super::routes;
use crate::types::{ChatMessage, MessageRole};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(routes::chat::chat_handler),
    components(schemas(ChatRequest, ChatResponse, ErrorResponse, ChatMessage, MessageRole)),
    tags((name = "chat", description = "Single-reply chat completion across providers"))
)]
pub(super) struct ApiDoc;

pub(super) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
