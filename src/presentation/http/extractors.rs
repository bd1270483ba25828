// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{
    Extension,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Guard for admin routes. Requires the configured bearer token; passes
/// every request when no token is configured.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl<S> FromRequestParts<S> for AdminAccess
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let Some(expected) = app_state.admin_token.as_ref() else {
            return Ok(Self);
        };

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(unauthorized)?;

        if expected.matches(header.token()) {
            Ok(Self)
        } else {
            tracing::warn!(path = %parts.uri.path(), "rejected admin token");
            Err(unauthorized())
        }
    }
}

fn unauthorized() -> HttpError {
    HttpError::from_error(ApplicationError::unauthorized("Unauthorized"))
}

/// `Json` whose rejections use the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);
