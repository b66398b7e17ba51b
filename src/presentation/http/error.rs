use crate::application::{
    ApplicationResult, error::ApplicationError, ports::media::ImageRejection,
    validation::FieldError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

const INTERNAL_MESSAGE: &str = "an unexpected error occurred";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    errors: Option<Vec<FieldError>>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApplicationError::InvalidFields(fields) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "one or more fields are invalid".into(),
                errors: Some(fields.into_inner()),
            },
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) | ApplicationError::InvalidTransition(msg) => {
                Self::new(StatusCode::CONFLICT, msg)
            }
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::InvalidCredentials => {
                Self::new(StatusCode::UNAUTHORIZED, "invalid credentials")
            }
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::UserBlocked | ApplicationError::NotAssignedToOrder => {
                Self::new(StatusCode::FORBIDDEN, err.to_string())
            }
            ApplicationError::Image(rejection) => {
                let status = match rejection {
                    ImageRejection::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
                    ImageRejection::UnsupportedMedia => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    ImageRejection::Corrupted => StatusCode::UNPROCESSABLE_ENTITY,
                };
                Self::new(status, rejection.to_string())
            }
            ApplicationError::Infrastructure(details) => {
                tracing::error!(error = %details, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
            }
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            errors: self.errors,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Canonical reason phrase of the status code.
    pub error: String,
    pub message: String,
    /// Present only when individual fields failed validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validation::FieldErrors;

    fn status_of(err: ApplicationError) -> StatusCode {
        HttpError::from_error(err).status()
    }

    #[test]
    fn maps_error_taxonomy_to_statuses() {
        assert_eq!(status_of(ApplicationError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(ApplicationError::UserBlocked), StatusCode::FORBIDDEN);
        assert_eq!(status_of(ApplicationError::NotAssignedToOrder), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(ApplicationError::invalid_transition("nope")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ApplicationError::Image(ImageRejection::TooLarge)),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            status_of(ApplicationError::Image(ImageRejection::UnsupportedMedia)),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            status_of(ApplicationError::Image(ImageRejection::Corrupted)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn infrastructure_details_are_not_exposed() {
        let err = HttpError::from_error(ApplicationError::infrastructure("password=hunter2"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, INTERNAL_MESSAGE);
    }

    #[test]
    fn field_errors_are_carried() {
        let mut fields = FieldErrors::default();
        fields.push("email", "invalid email");
        let err = HttpError::from_error(ApplicationError::InvalidFields(fields));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.errors.map(|e| e.len()), Some(1));
    }
}
