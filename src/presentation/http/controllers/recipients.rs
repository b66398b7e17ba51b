// src/presentation/http/controllers/recipients.rs
use super::{PageParams, parse_path_id};
use crate::application::{
    commands::recipients::{CreateRecipientCommand, RecipientInput, UpdateRecipientCommand},
    dto::{Page, RecipientDto, RecipientSummaryDto},
    queries::recipients::{ListRecipientSummariesQuery, ListRecipientsQuery},
};
use crate::domain::recipient::RecipientId;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipientRequest {
    pub full_name: String,
    pub email: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub address: String,
    #[schema(example = "01310-100")]
    pub zipcode: String,
}

impl From<RecipientRequest> for RecipientInput {
    fn from(request: RecipientRequest) -> Self {
        Self {
            full_name: request.full_name,
            email: request.email,
            state: request.state,
            city: request.city,
            neighborhood: request.neighborhood,
            address: request.address,
            zipcode: request.zipcode,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipientSearchParams {
    /// Case-insensitive match on name or email.
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[utoipa::path(
    post,
    path = "/v1/recipients",
    request_body = RecipientRequest,
    responses(
        (status = 201, description = "Recipient created.", body = RecipientDto),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 409, description = "Email already in use.", body = ErrorResponse),
        (status = 422, description = "Invalid fields.", body = ErrorResponse)
    ),
    tag = "Recipients"
)]
pub async fn create_recipient(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<RecipientRequest>,
) -> HttpResult<(StatusCode, Json<RecipientDto>)> {
    state
        .services
        .recipient_commands
        .create_recipient(
            &user,
            CreateRecipientCommand {
                input: payload.into(),
            },
        )
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/v1/recipients",
    params(PageParams),
    responses(
        (status = 200, description = "Recipients, newest first.", body = Page<RecipientDto>),
        (status = 403, description = "Missing permission.", body = ErrorResponse)
    ),
    tag = "Recipients"
)]
pub async fn list_recipients(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<RecipientDto>>> {
    state
        .services
        .recipient_queries
        .list_recipients(
            &user,
            ListRecipientsQuery {
                page: params.page_request(),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/v1/recipients/lite",
    params(RecipientSearchParams),
    responses(
        (status = 200, description = "Id, name and email of matching recipients.", body = Page<RecipientSummaryDto>),
        (status = 403, description = "Missing permission.", body = ErrorResponse)
    ),
    tag = "Recipients"
)]
pub async fn list_recipient_summaries(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<RecipientSearchParams>,
) -> HttpResult<Json<Page<RecipientSummaryDto>>> {
    let page = PageParams {
        page: params.page,
        limit: params.limit,
    }
    .page_request();

    state
        .services
        .recipient_queries
        .list_recipient_summaries(&user, ListRecipientSummariesQuery { q: params.q, page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/v1/recipients/{id}",
    params(("id" = String, Path, description = "Recipient id")),
    responses(
        (status = 200, description = "Recipient details.", body = RecipientDto),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 404, description = "Unknown recipient.", body = ErrorResponse)
    ),
    tag = "Recipients"
)]
pub async fn get_recipient(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<RecipientDto>> {
    let id: RecipientId = parse_path_id(&id, "recipient")?;
    state
        .services
        .recipient_queries
        .get_recipient(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/v1/recipients/{id}",
    params(("id" = String, Path, description = "Recipient id")),
    request_body = RecipientRequest,
    responses(
        (status = 200, description = "Recipient updated.", body = RecipientDto),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 404, description = "Unknown recipient.", body = ErrorResponse),
        (status = 409, description = "Email already in use.", body = ErrorResponse),
        (status = 422, description = "Invalid fields.", body = ErrorResponse)
    ),
    tag = "Recipients"
)]
pub async fn update_recipient(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<RecipientRequest>,
) -> HttpResult<Json<RecipientDto>> {
    let id: RecipientId = parse_path_id(&id, "recipient")?;
    state
        .services
        .recipient_commands
        .update_recipient(
            &user,
            UpdateRecipientCommand {
                id,
                input: payload.into(),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/v1/recipients/{id}",
    params(("id" = String, Path, description = "Recipient id")),
    responses(
        (status = 204, description = "Recipient removed."),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 404, description = "Unknown recipient.", body = ErrorResponse)
    ),
    tag = "Recipients"
)]
pub async fn delete_recipient(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id: RecipientId = parse_path_id(&id, "recipient")?;
    state
        .services
        .recipient_commands
        .delete_recipient(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
