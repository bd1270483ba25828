// src/presentation/http/controllers/knowledge.rs
use crate::application::{commands::knowledge::UpdateKnowledgeCommand, dto::KnowledgeDto};
use crate::presentation::http::envelope::{ApiResponse, Envelope, ok};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminAccess, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::Extension;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKnowledgeRequest {
    pub document: Option<String>,
    /// Blank or missing restores the default prompt.
    pub system_prompt: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/ai-knowledge",
    responses(
        (status = 200, description = "Stored knowledge document, or the built-in one.", body = ApiResponse<KnowledgeDto>),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Knowledge"
)]
pub async fn get_knowledge(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
) -> HttpResult<Envelope<KnowledgeDto>> {
    let knowledge = state
        .services
        .knowledge_queries
        .get_knowledge()
        .await
        .into_http()?;
    Ok(ok(knowledge))
}

#[utoipa::path(
    put,
    path = "/api/ai-knowledge",
    request_body = UpdateKnowledgeRequest,
    responses(
        (status = 200, description = "Knowledge document saved.", body = ApiResponse<KnowledgeDto>),
        (status = 400, description = "Document missing.", body = ErrorResponse),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Knowledge"
)]
pub async fn update_knowledge(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    JsonBody(payload): JsonBody<UpdateKnowledgeRequest>,
) -> HttpResult<Envelope<KnowledgeDto>> {
    let knowledge = state
        .services
        .knowledge_commands
        .update_knowledge(UpdateKnowledgeCommand {
            document: payload.document,
            system_prompt: payload.system_prompt,
        })
        .await
        .into_http()?;
    Ok(ok(knowledge))
}
