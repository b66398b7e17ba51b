// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod orders;
pub mod recipients;
pub mod tracking;
pub mod users;

use crate::domain::shared::PageRequest;
use crate::presentation::http::error::{HttpError, HttpResult};
use serde::Deserialize;
use std::str::FromStr;
use utoipa::IntoParams;

/// Path identifiers that do not parse can never match a stored row.
fn parse_path_id<T: FromStr>(raw: &str, label: &str) -> HttpResult<T> {
    raw.parse()
        .map_err(|_| HttpError::not_found(format!("{label} not found")))
}

/// Raw `page` / `limit` query values; bad input falls back to the defaults.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page index.
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}
