// tests/support/helpers.rs
use super::mocks;
use axum::body;
use axum::http::StatusCode;
use fastfeet_api::application::{
    dto::AuthenticatedUser,
    services::{ApplicationServices, ServiceDependencies},
};
use fastfeet_api::domain::recipient::Recipient;
use fastfeet_api::domain::user::User;
use fastfeet_api::presentation::http::{
    routes::{RouterOptions, build_router},
    state::{HttpState, SessionCookieConfig},
};
use serde_json::Value;
use std::sync::Arc;

/// インメモリの依存関係一式。各テストは状態を直接覗ける
pub struct TestApp {
    pub users: Arc<mocks::InMemoryUserRepo>,
    pub recipients: Arc<mocks::InMemoryRecipientRepo>,
    pub orders: Arc<mocks::InMemoryOrderRepo>,
    pub notifications: Arc<mocks::CapturingDispatcher>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(mocks::InMemoryUserRepo::default());
        let recipients = Arc::new(mocks::InMemoryRecipientRepo::default());
        let orders = Arc::new(mocks::InMemoryOrderRepo::new(Arc::clone(&recipients)));
        let notifications = Arc::new(mocks::CapturingDispatcher::default());

        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            user_repo: users.clone(),
            recipient_repo: recipients.clone(),
            order_repo: orders.clone(),
            password_hasher: Arc::new(mocks::StrictPasswordHasher),
            token_manager: Arc::new(mocks::PrefixTokenManager),
            image_validator: Arc::new(mocks::AcceptAllImages),
            notifications: notifications.clone(),
            tracking_codes: Arc::new(mocks::SequentialTrackingCodes::default()),
            clock: Arc::new(mocks::FixedClock),
        }));

        Self {
            users,
            recipients,
            orders,
            notifications,
            services,
        }
    }

    pub fn state(&self) -> HttpState {
        HttpState::new(Arc::clone(&self.services), SessionCookieConfig::default())
    }

    pub fn router(&self) -> axum::Router {
        build_router(self.state(), &RouterOptions::default())
    }

    pub fn seed_user(&self, user: User) -> User {
        self.users.seed(user)
    }

    pub fn seed_recipient(&self, recipient: Recipient) -> Recipient {
        self.recipients.seed(recipient)
    }
}

pub fn make_test_router() -> axum::Router {
    TestApp::new().router()
}

/// サービス層を直接呼ぶときの認証済み主体
pub fn actor(user: &User) -> AuthenticatedUser {
    let issued_at = mocks::fixed_now();
    AuthenticatedUser {
        id: user.id,
        issued_at,
        expires_at: issued_at + chrono::Duration::hours(6),
    }
}

/// `Authorization` ヘッダー値
pub fn bearer(user: &User) -> String {
    format!("Bearer {}", mocks::token_for(user.id))
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
