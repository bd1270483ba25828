// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{blogs, catalogs, chat, contact, knowledge, sitemap, submissions},
    middleware::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, patch, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Per-client quota for the public intake endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst: u32,
}

#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub allowed_origins: Vec<String>,
    /// `None` disables rate limiting, e.g. when no peer address is available.
    pub rate_limit: Option<RateLimitSettings>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            rate_limit: None,
        }
    }
}

pub fn build_router(state: HttpState, config: &RouterConfig) -> Router {
    let mut intake = Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/contact", post(contact::submit_contact));

    if let Some(limits) = config.rate_limit {
        match rate_limit_layer(limits.per_second, limits.burst) {
            Some(layer) => intake = intake.layer(layer),
            None => tracing::warn!(?limits, "unusable rate limit, intake endpoints are unlimited"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/blogs",
            get(blogs::list_blogs).post(blogs::create_blog),
        )
        .route("/api/blogs/by-slug/{slug}", get(blogs::get_blog_by_slug))
        .route(
            "/api/blogs/{id}",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        .route("/api/admin/blogs", get(blogs::list_all_blogs))
        .route(
            "/api/catalogs",
            get(catalogs::list_catalogs).post(catalogs::create_catalog),
        )
        .route("/api/catalogs/seed", post(catalogs::seed_catalogs))
        .route(
            "/api/catalogs/by-slug/{slug}",
            get(catalogs::get_catalog_by_slug),
        )
        .route(
            "/api/catalogs/{id}",
            get(catalogs::get_catalog)
                .put(catalogs::update_catalog)
                .delete(catalogs::delete_catalog),
        )
        .route("/api/admin/catalogs", get(catalogs::list_all_catalogs))
        .route(
            "/api/ai-knowledge",
            get(knowledge::get_knowledge).put(knowledge::update_knowledge),
        )
        .route(
            "/api/admin/submissions",
            patch(submissions::update_submission),
        )
        .route("/api/sitemap", get(sitemap::sitemap))
        .merge(intake)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
