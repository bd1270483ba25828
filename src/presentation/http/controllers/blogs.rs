// src/presentation/http/controllers/blogs.rs
use crate::application::{
    commands::blogs::{CreateBlogCommand, DeleteBlogCommand, UpdateBlogCommand},
    dto::{BlogDto, MessageDto},
    queries::blogs::{GetBlogByIdQuery, GetBlogBySlugQuery, ListBlogsQuery},
};
use crate::presentation::http::envelope::{ApiResponse, Envelope, ok};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminAccess, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Blog fields accepted on create and update. Omitted fields keep their
/// default (create) or stored value (update).
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub published: Option<bool>,
    pub slug: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "Published posts, newest first.", body = ApiResponse<Vec<BlogDto>>)
    ),
    tag = "Blogs"
)]
pub async fn list_blogs(Extension(state): Extension<HttpState>) -> HttpResult<Envelope<Vec<BlogDto>>> {
    let blogs = state
        .services
        .blog_queries
        .list_blogs(ListBlogsQuery {
            include_drafts: false,
        })
        .await
        .into_http()?;
    Ok(ok(blogs))
}

#[utoipa::path(
    get,
    path = "/api/admin/blogs",
    responses(
        (status = 200, description = "All posts including drafts.", body = ApiResponse<Vec<BlogDto>>),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn list_all_blogs(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
) -> HttpResult<Envelope<Vec<BlogDto>>> {
    let blogs = state
        .services
        .blog_queries
        .list_blogs(ListBlogsQuery {
            include_drafts: true,
        })
        .await
        .into_http()?;
    Ok(ok(blogs))
}

#[utoipa::path(
    get,
    path = "/api/blogs/by-slug/{slug}",
    params(("slug" = String, Path, description = "Post slug, legacy id or title-derived slug")),
    responses(
        (status = 200, description = "Published post.", body = ApiResponse<BlogDto>),
        (status = 404, description = "No published post matches.", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn get_blog_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Envelope<BlogDto>> {
    let blog = state
        .services
        .blog_queries
        .get_blog_by_slug(GetBlogBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(ok(blog))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post by id.", body = ApiResponse<BlogDto>),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn get_blog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Envelope<BlogDto>> {
    let blog = state
        .services
        .blog_queries
        .get_blog_by_id(GetBlogByIdQuery { id })
        .await
        .into_http()?;
    Ok(ok(blog))
}

#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = BlogRequest,
    responses(
        (status = 201, description = "Post created.", body = ApiResponse<BlogDto>),
        (status = 400, description = "Title or content missing.", body = ErrorResponse),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn create_blog(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    JsonBody(payload): JsonBody<BlogRequest>,
) -> HttpResult<(StatusCode, Envelope<BlogDto>)> {
    let command = CreateBlogCommand {
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        author: payload.author,
        category: payload.category,
        image: payload.image,
        published: payload.published,
        slug: payload.slug,
    };
    let blog = state
        .services
        .blog_commands
        .create_blog(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, ok(blog)))
}

#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Post id")),
    request_body = BlogRequest,
    responses(
        (status = 200, description = "Post updated.", body = ApiResponse<BlogDto>),
        (status = 404, description = "Unknown id.", body = ErrorResponse),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn update_blog(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<BlogRequest>,
) -> HttpResult<Envelope<BlogDto>> {
    let command = UpdateBlogCommand {
        id,
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        author: payload.author,
        category: payload.category,
        image: payload.image,
        published: payload.published,
        slug: payload.slug,
    };
    let blog = state
        .services
        .blog_commands
        .update_blog(command)
        .await
        .into_http()?;
    Ok(ok(blog))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted.", body = ApiResponse<MessageDto>),
        (status = 404, description = "Unknown id.", body = ErrorResponse),
        (status = 401, description = "Missing or wrong admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn delete_blog(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Path(id): Path<String>,
) -> HttpResult<Envelope<MessageDto>> {
    state
        .services
        .blog_commands
        .delete_blog(DeleteBlogCommand { id })
        .await
        .into_http()?;
    Ok(ok(MessageDto::new("Blog deleted successfully")))
}
