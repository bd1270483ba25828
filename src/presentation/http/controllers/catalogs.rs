// src/presentation/http/controllers/catalogs.rs
use crate::application::{
    commands::catalogs::{
        CatalogContent, CreateCatalogCommand, DeleteCatalogCommand, UpdateCatalogCommand,
    },
    dto::{CatalogDto, MessageDto, SeedResultDto},
    queries::catalogs::{GetCatalogByIdQuery, GetCatalogBySlugQuery, ListCatalogsQuery},
};
use crate::domain::catalog::{CatalogCta, CatalogSections, ColorTheme};
use crate::presentation::http::envelope::{ApiResponse, Envelope, ok};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminAccess, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub secondary_image: Option<String>,
    pub icon: Option<String>,
    pub color_theme: Option<ColorTheme>,
    pub sections: Option<CatalogSections>,
    pub cta: Option<CatalogCta>,
    pub published: Option<bool>,
}

impl CatalogRequest {
    fn split(self) -> (Option<String>, Option<String>, CatalogContent) {
        let content = CatalogContent {
            description: self.description,
            hero_image: self.hero_image,
            secondary_image: self.secondary_image,
            icon: self.icon,
            color_theme: self.color_theme,
            sections: self.sections,
            cta: self.cta,
            published: self.published,
        };
        (self.title, self.slug, content)
    }
}

#[utoipa::path(
    get,
    path = "/api/catalogs",
    responses(
        (status = 200, description = "Published catalogs, newest first.", body = ApiResponse<Vec<CatalogDto>>)
    ),
    tag = "Catalogs"
)]
pub async fn list_catalogs(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Envelope<Vec<CatalogDto>>> {
    let catalogs = state
        .services
        .catalog_queries
        .list_catalogs(ListCatalogsQuery {
            include_drafts: false,
        })
        .await
        .into_http()?;
    Ok(ok(catalogs))
}

#[utoipa::path(
    get,
    path = "/api/admin/catalogs",
    responses(
        (status = 200, description = "All catalogs including drafts.", body = ApiResponse<Vec<CatalogDto>>),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalogs"
)]
pub async fn list_all_catalogs(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
) -> HttpResult<Envelope<Vec<CatalogDto>>> {
    let catalogs = state
        .services
        .catalog_queries
        .list_catalogs(ListCatalogsQuery {
            include_drafts: true,
        })
        .await
        .into_http()?;
    Ok(ok(catalogs))
}

#[utoipa::path(
    get,
    path = "/api/catalogs/by-slug/{slug}",
    params(("slug" = String, Path, description = "Catalog slug, legacy id or title-derived slug")),
    responses(
        (status = 200, description = "Published catalog.", body = ApiResponse<CatalogDto>),
        (status = 404, description = "No published catalog matches.", body = ErrorResponse)
    ),
    tag = "Catalogs"
)]
pub async fn get_catalog_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Envelope<CatalogDto>> {
    let catalog = state
        .services
        .catalog_queries
        .get_catalog_by_slug(GetCatalogBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(ok(catalog))
}

#[utoipa::path(
    get,
    path = "/api/catalogs/{id}",
    params(("id" = String, Path, description = "Catalog id")),
    responses(
        (status = 200, description = "Catalog by id.", body = ApiResponse<CatalogDto>),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Catalogs"
)]
pub async fn get_catalog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Envelope<CatalogDto>> {
    let catalog = state
        .services
        .catalog_queries
        .get_catalog_by_id(GetCatalogByIdQuery { id })
        .await
        .into_http()?;
    Ok(ok(catalog))
}

#[utoipa::path(
    post,
    path = "/api/catalogs",
    request_body = CatalogRequest,
    responses(
        (status = 201, description = "Catalog created.", body = ApiResponse<CatalogDto>),
        (status = 400, description = "Title missing.", body = ErrorResponse),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalogs"
)]
pub async fn create_catalog(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    JsonBody(payload): JsonBody<CatalogRequest>,
) -> HttpResult<(StatusCode, Envelope<CatalogDto>)> {
    let (title, slug, content) = payload.split();
    let catalog = state
        .services
        .catalog_commands
        .create_catalog(CreateCatalogCommand {
            title,
            slug,
            content,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, ok(catalog)))
}

#[utoipa::path(
    put,
    path = "/api/catalogs/{id}",
    params(("id" = String, Path, description = "Catalog id")),
    request_body = CatalogRequest,
    responses(
        (status = 200, description = "Catalog updated.", body = ApiResponse<CatalogDto>),
        (status = 404, description = "Unknown id.", body = ErrorResponse),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalogs"
)]
pub async fn update_catalog(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<CatalogRequest>,
) -> HttpResult<Envelope<CatalogDto>> {
    let (title, slug, content) = payload.split();
    let catalog = state
        .services
        .catalog_commands
        .update_catalog(UpdateCatalogCommand {
            id,
            title,
            slug,
            content,
        })
        .await
        .into_http()?;
    Ok(ok(catalog))
}

#[utoipa::path(
    delete,
    path = "/api/catalogs/{id}",
    params(("id" = String, Path, description = "Catalog id")),
    responses(
        (status = 200, description = "Catalog deleted.", body = ApiResponse<MessageDto>),
        (status = 404, description = "Unknown id.", body = ErrorResponse),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalogs"
)]
pub async fn delete_catalog(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Path(id): Path<String>,
) -> HttpResult<Envelope<MessageDto>> {
    state
        .services
        .catalog_commands
        .delete_catalog(DeleteCatalogCommand { id })
        .await
        .into_http()?;
    Ok(ok(MessageDto::new("Catalog deleted successfully")))
}

#[utoipa::path(
    post,
    path = "/api/catalogs/seed",
    responses(
        (status = 200, description = "Built-in catalogs created or refreshed.", body = ApiResponse<Vec<SeedResultDto>>),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalogs"
)]
pub async fn seed_catalogs(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
) -> HttpResult<Envelope<Vec<SeedResultDto>>> {
    let results = state
        .services
        .catalog_commands
        .seed_catalogs()
        .await
        .into_http()?;
    tracing::info!(count = results.len(), "catalogs seeded");
    Ok(ok(results))
}
