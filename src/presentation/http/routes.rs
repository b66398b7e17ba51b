// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, orders, recipients, tracking, users},
    middleware::rate_limit::login_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{delete, get, patch, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Upload ceiling for the delivery route; the image validator applies the stricter 5 MB rule.
const DELIVERY_BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    /// Zero disables login rate limiting.
    pub login_rate_limit_per_minute: u32,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            login_rate_limit_per_minute: 0,
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // Credentials are required for the session cookie, which rules out wildcard origins.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    let mut login = Router::new().route("/v1/login", post(auth::login));
    if let Some(limiter) = login_rate_limit_layer(options.login_rate_limit_per_minute) {
        login = login.route_layer(limiter);
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(login)
        .route("/v1/logout", post(auth::logout))
        .route("/v1/users/me", get(users::me))
        .route("/v1/users/admin", post(users::create_admin))
        .route("/v1/users/delivery-man", post(users::create_delivery_man))
        .route("/v1/users/{id}/block", patch(users::block_user))
        .route("/v1/users/{id}/unblock", patch(users::unblock_user))
        .route("/v1/users/{id}", delete(users::delete_user))
        .route(
            "/v1/recipients",
            get(recipients::list_recipients).post(recipients::create_recipient),
        )
        .route(
            "/v1/recipients/lite",
            get(recipients::list_recipient_summaries),
        )
        .route(
            "/v1/recipients/{id}",
            get(recipients::get_recipient)
                .put(recipients::update_recipient)
                .delete(recipients::delete_recipient),
        )
        .route(
            "/v1/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/v1/orders/{id}", get(orders::get_order))
        .route(
            "/v1/orders/{id}/status/pick-up",
            patch(orders::pick_up_order),
        )
        .route(
            "/v1/orders/{id}/status/deliver",
            patch(orders::deliver_order).layer(DefaultBodyLimit::max(DELIVERY_BODY_LIMIT)),
        )
        .route("/v1/tracking/{code}", get(tracking::track_order))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
