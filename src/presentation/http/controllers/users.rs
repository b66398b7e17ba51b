// src/presentation/http/controllers/users.rs
use super::parse_path_id;
use crate::application::{commands::users::CreateUserCommand, dto::UserDto};
use crate::domain::user::UserId;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub full_name: String,
    #[schema(example = "529.982.247-25")]
    pub cpf: String,
    pub email: String,
}

impl From<CreateUserRequest> for CreateUserCommand {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            full_name: request.full_name,
            cpf: request.cpf,
            email: request.email,
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/users/me",
    responses(
        (status = 200, description = "Profile of the signed-in user.", body = UserDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 403, description = "User is blocked.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .me(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/v1/users/admin",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Admin created; a temporary password is emailed.", body = UserDto),
        (status = 403, description = "Only owners may create admins.", body = ErrorResponse),
        (status = 409, description = "CPF or email already in use.", body = ErrorResponse),
        (status = 422, description = "Invalid fields.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_admin(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    state
        .services
        .user_commands
        .create_admin(&user, payload.into())
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/v1/users/delivery-man",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Deliveryman created; a temporary password is emailed.", body = UserDto),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 409, description = "CPF or email already in use.", body = ErrorResponse),
        (status = 422, description = "Invalid fields.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_delivery_man(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    state
        .services
        .user_commands
        .create_delivery_man(&user, payload.into())
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    patch,
    path = "/v1/users/{id}/block",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User blocked.", body = UserDto),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 404, description = "Unknown user.", body = ErrorResponse),
        (status = 409, description = "User already blocked.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn block_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<UserDto>> {
    let target: UserId = parse_path_id(&id, "user")?;
    state
        .services
        .user_commands
        .block_user(&user, target)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/v1/users/{id}/unblock",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User unblocked.", body = UserDto),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 404, description = "Unknown user.", body = ErrorResponse),
        (status = 409, description = "User is not blocked.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn unblock_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<UserDto>> {
    let target: UserId = parse_path_id(&id, "user")?;
    state
        .services
        .user_commands
        .unblock_user(&user, target)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "User removed."),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 404, description = "Unknown user.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let target: UserId = parse_path_id(&id, "user")?;
    state
        .services
        .user_commands
        .delete_user(&user, target)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
