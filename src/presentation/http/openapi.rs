// src/presentation/http/openapi.rs
use crate::application::dto::{
    BlogDto, CatalogDto, ChangeFrequency, ChatReplyDto, ChatTurnDto, KnowledgeDto, MessageDto,
    SeedAction, SeedResultDto, SitemapEntryDto,
};
use crate::domain::catalog::{
    CatalogCta, CatalogSections, CatalogVariant, ColorTheme, ProductDescription, Specification,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
const LOCAL_SERVER: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::blogs::list_blogs,
        crate::presentation::http::controllers::blogs::list_all_blogs,
        crate::presentation::http::controllers::blogs::get_blog_by_slug,
        crate::presentation::http::controllers::blogs::get_blog,
        crate::presentation::http::controllers::blogs::create_blog,
        crate::presentation::http::controllers::blogs::update_blog,
        crate::presentation::http::controllers::blogs::delete_blog,
        crate::presentation::http::controllers::catalogs::list_catalogs,
        crate::presentation::http::controllers::catalogs::list_all_catalogs,
        crate::presentation::http::controllers::catalogs::get_catalog_by_slug,
        crate::presentation::http::controllers::catalogs::get_catalog,
        crate::presentation::http::controllers::catalogs::create_catalog,
        crate::presentation::http::controllers::catalogs::update_catalog,
        crate::presentation::http::controllers::catalogs::delete_catalog,
        crate::presentation::http::controllers::catalogs::seed_catalogs,
        crate::presentation::http::controllers::knowledge::get_knowledge,
        crate::presentation::http::controllers::knowledge::update_knowledge,
        crate::presentation::http::controllers::chat::chat,
        crate::presentation::http::controllers::contact::submit_contact,
        crate::presentation::http::controllers::submissions::update_submission,
        crate::presentation::http::controllers::sitemap::sitemap,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::blogs::BlogRequest,
            crate::presentation::http::controllers::catalogs::CatalogRequest,
            crate::presentation::http::controllers::knowledge::UpdateKnowledgeRequest,
            crate::presentation::http::controllers::chat::ChatRequest,
            crate::presentation::http::controllers::contact::ContactRequest,
            crate::presentation::http::controllers::submissions::UpdateSubmissionRequest,
            BlogDto,
            CatalogDto,
            ColorTheme,
            CatalogSections,
            CatalogCta,
            CatalogVariant,
            ProductDescription,
            Specification,
            SeedAction,
            SeedResultDto,
            KnowledgeDto,
            ChatTurnDto,
            ChatReplyDto,
            MessageDto,
            ChangeFrequency,
            SitemapEntryDto
        )
    ),
    tags(
        (name = "Blogs", description = "Blog posts"),
        (name = "Catalogs", description = "Product catalogs"),
        (name = "Knowledge", description = "Assistant knowledge document"),
        (name = "Chat", description = "Site assistant"),
        (name = "Contact", description = "Contact and quote intake"),
        (name = "Submissions", description = "Submission ledger administration"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Oseberg Exim API",
        description = "Backend for the Oseberg Exim site and admin panel",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();
        urls.push(LOCAL_SERVER.to_string());

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and ReDoc at
/// `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
