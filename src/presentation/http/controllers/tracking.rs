// src/presentation/http/controllers/tracking.rs
use super::parse_path_id;
use crate::application::dto::OrderTrackingDto;
use crate::domain::order::TrackingCode;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/v1/tracking/{code}",
    params(("code" = String, Path, description = "Tracking code mailed to the recipient")),
    responses(
        (status = 200, description = "Current status of the order.", body = OrderTrackingDto),
        (status = 404, description = "Unknown tracking code.", body = ErrorResponse)
    ),
    security(()),
    tag = "Tracking"
)]
pub async fn track_order(
    Extension(state): Extension<HttpState>,
    Path(code): Path<String>,
) -> HttpResult<Json<OrderTrackingDto>> {
    let code: TrackingCode = parse_path_id(&code, "order")?;
    state
        .services
        .order_queries
        .track_order(code)
        .await
        .into_http()
        .map(Json)
}
