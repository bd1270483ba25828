// src/presentation/http/controllers/submissions.rs
use crate::application::{commands::submissions::UpdateSubmissionCommand, dto::MessageDto};
use crate::presentation::http::envelope::{ApiResponse, Envelope, ok};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminAccess, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::Extension;
use serde::Deserialize;
use utoipa::ToSchema;

/// Identifies a ledger row by email and its exact timestamp cell.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSubmissionRequest {
    pub email: Option<String>,
    pub timestamp: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[utoipa::path(
    patch,
    path = "/api/admin/submissions",
    request_body = UpdateSubmissionRequest,
    responses(
        (status = 200, description = "Row updated.", body = ApiResponse<MessageDto>),
        (status = 400, description = "Email or timestamp missing.", body = ErrorResponse),
        (status = 404, description = "No matching row.", body = ErrorResponse),
        (status = 503, description = "Ledger not configured.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Submissions"
)]
pub async fn update_submission(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    JsonBody(payload): JsonBody<UpdateSubmissionRequest>,
) -> HttpResult<Envelope<MessageDto>> {
    let message = state
        .services
        .submission_commands
        .update_submission(UpdateSubmissionCommand {
            email: payload.email,
            timestamp: payload.timestamp,
            status: payload.status,
            notes: payload.notes,
        })
        .await
        .into_http()?;
    Ok(ok(message))
}
