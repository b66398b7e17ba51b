// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::LoginUserCommand,
    dto::{AuthTokenDto, UserDto},
    error::ApplicationError,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::{HttpState, SessionCookieConfig};
use axum::{
    Extension, Json,
    http::{HeaderValue, StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "529.982.247-25")]
    pub cpf: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

fn session_cookie(config: &SessionCookieConfig, value: &str, max_age: i64) -> HttpResult<HeaderValue> {
    let secure = if config.secure { "; Secure" } else { "" };
    let cookie = format!(
        "{}={value}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}{secure}",
        config.name
    );
    HeaderValue::from_str(&cookie).map_err(|err| {
        HttpError::from_error(ApplicationError::infrastructure(format!(
            "session cookie could not be encoded: {err}"
        )))
    })
}

#[utoipa::path(
    post,
    path = "/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established; the token is also set as a cookie.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse),
        (status = 403, description = "User is blocked.", body = ErrorResponse),
        (status = 422, description = "Malformed CPF or password.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<impl IntoResponse> {
    let result = state
        .services
        .user_commands
        .login(LoginUserCommand {
            cpf: payload.cpf,
            password: payload.password,
        })
        .await
        .into_http()?;

    let cookie = session_cookie(&state.session, &result.token.token, result.token.expires_in)?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            token: result.token,
            user: result.user,
        }),
    ))
}

/// Clears the session cookie. Tokens stay valid until they expire.
#[utoipa::path(
    post,
    path = "/v1/logout",
    responses(
        (status = 204, description = "Session cookie cleared.")
    ),
    security(()),
    tag = "Auth"
)]
pub async fn logout(Extension(state): Extension<HttpState>) -> HttpResult<impl IntoResponse> {
    let cookie = session_cookie(&state.session, "", 0)?;
    Ok((StatusCode::NO_CONTENT, AppendHeaders([(SET_COOKIE, cookie)])))
}
