// src/presentation/http/controllers/sitemap.rs
use crate::application::dto::SitemapEntryDto;
use crate::presentation::http::envelope::{ApiResponse, Envelope, ok};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::Extension;

#[utoipa::path(
    get,
    path = "/api/sitemap",
    responses(
        (status = 200, description = "Public site pages with change hints.", body = ApiResponse<Vec<SitemapEntryDto>>)
    ),
    tag = "System"
)]
pub async fn sitemap(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Envelope<Vec<SitemapEntryDto>>> {
    let entries = state
        .services
        .sitemap_queries
        .build_sitemap()
        .await
        .into_http()?;
    Ok(ok(entries))
}
