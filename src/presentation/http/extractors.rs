// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Caller identity resolved from the session cookie, or from an
/// `Authorization: Bearer` header when no cookie is present.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let from_cookie = parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(cookie_name).map(str::to_owned))
        .filter(|token| !token.is_empty());

    from_cookie.or_else(|| {
        parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .map(|header| header.token().to_owned())
    })
}

impl<S> FromRequestParts<S> for Authenticated
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

        let token = session_token(parts, &app_state.session.name).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("missing session token"))
        })?;

        let user = app_state
            .services
            .token_manager()
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}
