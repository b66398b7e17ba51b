// src/domain/shared/text.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_TEXT_LENGTH: usize = 255;

/// Trims `value` and enforces the required/max-length rule shared by free-text fields.
pub fn required_text(label: &str, value: impl Into<String>) -> DomainResult<String> {
    let value = value.into().trim().to_string();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{label} is required")));
    }
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::Validation(format!(
            "{label} must be at most {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("full name", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FullName> for String {
    fn from(value: FullName) -> Self {
        value.0
    }
}
