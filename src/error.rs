//! Service error types with HTTP status code mapping.
//!
//! [`BoardError`] is the central error type. Each variant maps to a specific
//! HTTP status code and structured JSON error response.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::PostId;
use crate::validation::FieldErrors;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1002,
///     "message": "The title is not unique.",
///     "fields": { "title": ["The title is not unique."] }
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`BoardError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Per-field validation messages, present only for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                    |
/// |-----------|------------|--------------------------------|
/// | 1000–1999 | Validation | 400 Bad Request / 422          |
/// | 2000–2999 | Not Found  | 404 Not Found                  |
/// | 3000–3999 | Server     | 500 Internal Server Error      |
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Malformed request that never reached field validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// One or more fields violate a constraint. No write happened.
    #[error("{0}")]
    ValidationFailed(FieldErrors),

    /// The store rejected a write because another row already holds the
    /// value of a unique column.
    #[error("The {attribute} is not unique.")]
    UniqueViolation {
        /// Offending attribute name.
        attribute: &'static str,
    },

    /// Post with the given ID was not found.
    #[error("post not found: {0}")]
    PostNotFound(PostId),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),
}

impl BoardError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::ValidationFailed(_) => 1002,
            Self::UniqueViolation { .. } => 1003,
            Self::PostNotFound(_) => 2001,
            Self::PersistenceError(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ValidationFailed(_) | Self::UniqueViolation { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::PostNotFound(_) => StatusCode::NOT_FOUND,
            Self::PersistenceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field-scoped messages carried by validation failures.
    #[must_use]
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            Self::ValidationFailed(errors) => Some(errors.clone()),
            Self::UniqueViolation { attribute } => Some(FieldErrors::single(
                attribute,
                format!("The {attribute} is not unique."),
            )),
            _ => None,
        }
    }

    /// Folds a store-level unique violation into a regular validation
    /// failure so callers see one outcome for duplicates.
    #[must_use]
    pub fn into_validation(self) -> Self {
        match self.field_errors() {
            Some(fields) => Self::ValidationFailed(fields),
            None => self,
        }
    }
}

impl From<JsonRejection> for BoardError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for BoardError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for BoardError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<sqlx::Error> for BoardError {
    fn from(err: sqlx::Error) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                fields: self.field_errors(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            BoardError::PostNotFound(PostId::new(9)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BoardError::ValidationFailed(FieldErrors::new()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            BoardError::PersistenceError("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            BoardError::InvalidRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn unique_violation_folds_into_validation() {
        let err = BoardError::UniqueViolation { attribute: "title" }.into_validation();
        let BoardError::ValidationFailed(fields) = err else {
            unreachable!("expected validation failure");
        };
        assert_eq!(fields.first("title"), Some("The title is not unique."));
    }

    #[test]
    fn non_validation_errors_pass_through_fold() {
        let err = BoardError::PostNotFound(PostId::new(1)).into_validation();
        assert!(matches!(err, BoardError::PostNotFound(_)));
    }

    #[test]
    fn validation_message_joins_field_messages() {
        let err = BoardError::ValidationFailed(FieldErrors::single(
            "title",
            "The title field is required.",
        ));
        assert_eq!(err.to_string(), "The title field is required.");
    }
}
