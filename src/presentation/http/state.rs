// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// How the session token travels in cookies.
#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    pub name: String,
    pub secure: bool,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            name: "fastfeet_session".into(),
            secure: false,
        }
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub session: Arc<SessionCookieConfig>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, session: SessionCookieConfig) -> Self {
        Self {
            services,
            session: Arc::new(session),
        }
    }
}
