// src/presentation/http/envelope.rs
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success body shared by every JSON endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

pub type Envelope<T> = Json<ApiResponse<T>>;

pub fn ok<T>(data: T) -> Envelope<T> {
    Json(ApiResponse {
        success: true,
        data,
    })
}
