// src/presentation/http/controllers/chat.rs
use crate::application::{
    commands::chat::ChatCommand,
    dto::{ChatReplyDto, ChatTurnDto},
};
use crate::presentation::http::envelope::{ApiResponse, Envelope, ok};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::Extension;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurnDto>,
    /// When present the exchange is recorded in the submission ledger.
    pub user_email: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply.", body = ApiResponse<ChatReplyDto>),
        (status = 400, description = "Message missing.", body = ErrorResponse),
        (status = 429, description = "Too many requests."),
        (status = 503, description = "AI provider not configured.", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ChatRequest>,
) -> HttpResult<Envelope<ChatReplyDto>> {
    let reply = state
        .services
        .chat_commands
        .chat(ChatCommand {
            message: payload.message,
            conversation_history: payload.conversation_history,
            user_email: payload.user_email,
        })
        .await
        .into_http()?;
    Ok(ok(reply))
}
