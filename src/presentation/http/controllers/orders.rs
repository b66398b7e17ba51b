// src/presentation/http/controllers/orders.rs
use super::{PageParams, parse_path_id};
use crate::application::{
    commands::orders::{CreateOrderCommand, DeliverOrderCommand},
    dto::{OrderDetailsDto, OrderDto, Page},
    error::ApplicationError,
    ports::media::ImageUpload,
    queries::orders::ListOrdersQuery,
};
use crate::domain::order::OrderId;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub title: String,
    /// Kept as text so a malformed id is reported as a field error.
    pub recipient_id: String,
}

/// Multipart body of the delivery endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct DeliverOrderForm {
    /// JPEG or PNG photo, at most 5 MB.
    #[schema(format = Binary, value_type = String)]
    pub image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/v1/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created in WAITING status.", body = OrderDto),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 404, description = "Unknown recipient.", body = ErrorResponse),
        (status = 422, description = "Invalid fields.", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateOrderRequest>,
) -> HttpResult<(StatusCode, Json<OrderDto>)> {
    state
        .services
        .order_commands
        .create_order(
            &user,
            CreateOrderCommand {
                title: payload.title,
                recipient_id: payload.recipient_id,
            },
        )
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/v1/orders",
    params(PageParams),
    responses(
        (status = 200, description = "Orders visible to the caller, newest first.", body = Page<OrderDto>),
        (status = 403, description = "Missing permission.", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<OrderDto>>> {
    state
        .services
        .order_queries
        .list_orders(
            &user,
            ListOrdersQuery {
                page: params.page_request(),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/v1/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with its recipient.", body = OrderDetailsDto),
        (status = 403, description = "Order belongs to another deliveryman.", body = ErrorResponse),
        (status = 404, description = "Unknown order.", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<OrderDetailsDto>> {
    let id: OrderId = parse_path_id(&id, "order")?;
    state
        .services
        .order_queries
        .get_order(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/v1/orders/{id}/status/pick-up",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order picked up by the caller.", body = OrderDto),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 404, description = "Unknown order.", body = ErrorResponse),
        (status = 409, description = "Order is not waiting.", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn pick_up_order(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<OrderDto>> {
    let id: OrderId = parse_path_id(&id, "order")?;
    state
        .services
        .order_commands
        .pick_up_order(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/v1/orders/{id}/status/deliver",
    params(("id" = String, Path, description = "Order id")),
    request_body(content = DeliverOrderForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Order delivered.", body = OrderDto),
        (status = 403, description = "Missing permission.", body = ErrorResponse),
        (status = 404, description = "Unknown order.", body = ErrorResponse),
        (status = 409, description = "Order is not picked up.", body = ErrorResponse),
        (status = 413, description = "Image larger than 5 MB.", body = ErrorResponse),
        (status = 415, description = "Image is not JPEG or PNG.", body = ErrorResponse),
        (status = 422, description = "Image missing or corrupted.", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn deliver_order(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    multipart: Multipart,
) -> HttpResult<Json<OrderDto>> {
    state
        .services
        .order_commands
        .authorize_delivery(&user)
        .await
        .into_http()?;
    let order_id: OrderId = parse_path_id(&id, "order")?;
    let image = read_image_field(multipart).await?;

    state
        .services
        .order_commands
        .deliver_order(&user, DeliverOrderCommand { order_id, image })
        .await
        .into_http()
        .map(Json)
}

async fn read_image_field(mut multipart: Multipart) -> HttpResult<Option<ImageUpload>> {
    while let Some(field) = multipart.next_field().await.map_err(malformed_upload)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(malformed_upload)?;
        return Ok(Some(ImageUpload {
            file_name,
            content_type,
            bytes,
        }));
    }
    Ok(None)
}

fn malformed_upload(err: axum::extract::multipart::MultipartError) -> HttpError {
    HttpError::from_error(ApplicationError::validation(format!(
        "malformed multipart body: {}",
        err.body_text()
    )))
}
