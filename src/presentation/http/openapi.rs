// src/presentation/http/openapi.rs
use crate::application::{
    dto::{
        AuthTokenDto, OrderDetailsDto, OrderDto, OrderRecipientDto, OrderTrackingDto,
        RecipientDto, RecipientSummaryDto, UserDto,
    },
    validation::FieldError,
};
use crate::presentation::http::{
    controllers::{auth, orders, recipients, tracking, users},
    error::ErrorResponse,
    routes,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::logout,
        users::me,
        users::create_admin,
        users::create_delivery_man,
        users::block_user,
        users::unblock_user,
        users::delete_user,
        recipients::create_recipient,
        recipients::list_recipients,
        recipients::list_recipient_summaries,
        recipients::get_recipient,
        recipients::update_recipient,
        recipients::delete_recipient,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        orders::pick_up_order,
        orders::deliver_order,
        tracking::track_order,
        routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            FieldError,
            AuthTokenDto,
            UserDto,
            RecipientDto,
            RecipientSummaryDto,
            OrderDto,
            OrderDetailsDto,
            OrderRecipientDto,
            OrderTrackingDto,
            auth::LoginRequest,
            auth::LoginResponse,
            users::CreateUserRequest,
            recipients::RecipientRequest,
            orders::CreateOrderRequest,
            orders::DeliverOrderForm
        )
    ),
    tags(
        (name = "Auth", description = "Session endpoints"),
        (name = "Users", description = "Account management"),
        (name = "Recipients", description = "Recipient registry"),
        (name = "Orders", description = "Order lifecycle"),
        (name = "Tracking", description = "Public tracking lookups"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    info(
        title = "FastFeet API",
        description = "Delivery management backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)));
        components.add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("fastfeet_session"))),
        );
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the OpenAPI document as pretty JSON, creating parent directories.
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
