// src/presentation/http/controllers/contact.rs
use crate::application::{commands::submissions::ContactCommand, dto::MessageDto};
use crate::presentation::http::envelope::{ApiResponse, Envelope, ok};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::Extension;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// `"quote"` files the submission as a quote request.
    pub mode: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submission accepted.", body = ApiResponse<MessageDto>),
        (status = 400, description = "Name, email or message missing.", body = ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ContactRequest>,
) -> HttpResult<Envelope<MessageDto>> {
    let message = state
        .services
        .submission_commands
        .submit_contact(ContactCommand {
            name: payload.name,
            email: payload.email,
            message: payload.message,
            mode: payload.mode,
        })
        .await
        .into_http()?;
    Ok(ok(message))
}
