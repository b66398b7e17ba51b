// src/application/validation.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Collects per-field failures so a request reports every bad field at once.
///
/// ```ignore
/// let email = EmailAddress::new(raw_email);
/// let cpf = Cpf::parse(&raw_cpf);
/// FieldErrors::default()
///     .check("email", &email)
///     .check("cpf", &cpf)
///     .finish()?;
/// let (email, cpf) = (email?, cpf?);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn check<T>(mut self, field: &str, result: &DomainResult<T>) -> Self {
        if let Err(err) = result {
            self.push(field, describe(err));
        }
        self
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }

    pub fn finish(self) -> ApplicationResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::InvalidFields(self))
        }
    }
}

fn describe(err: &DomainError) -> String {
    match err {
        DomainError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}
