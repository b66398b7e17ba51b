// src/domain/recipient/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::uuid_identifier;
use std::fmt;

uuid_identifier!(RecipientId, "recipient id");

const ZIPCODE_LENGTH: usize = 8;

/// Brazilian postal code (CEP), stored as 8 bare digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zipcode(String);

impl Zipcode {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::Validation("zipcode is required".into()));
        }
        if raw.chars().any(|c| !c.is_ascii_digit() && c != '-' && c != '.') {
            return Err(DomainError::Validation("zipcode must be numeric".into()));
        }
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != ZIPCODE_LENGTH {
            return Err(DomainError::Validation("zipcode must contain 8 digits".into()));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Zipcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Zipcode> for String {
    fn from(value: Zipcode) -> Self {
        value.0
    }
}
