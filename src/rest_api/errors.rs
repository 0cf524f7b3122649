//! # REST API Errors
//!
//! Error taxonomy for the HTTP surface:
//! - validation failures -> 400 with a generic body (the field name is
//!   logged, never sent to the client)
//! - missing rows -> 404 naming the resource
//! - anything from the database -> 500 with the raw error text

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// A create or patch body failed field validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The addressed row does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Unexpected persistence failure
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            // Generic on purpose: the client only learns that validation
            // failed, the offending field goes to the log.
            ApiError::Validation(err) => {
                tracing::warn!(error = %err, "validation failed");
                json!({ "errors": ["validation errors"] })
            }
            ApiError::NotFound(resource) => {
                json!({ "error": format!("{resource} not found") })
            }
            ApiError::Database(err) => {
                tracing::error!(error = %err, "database error");
                json!({ "error": err.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationError::NotAnObject).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Scientist").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(DbErr::Custom("boom".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_names_the_resource() {
        assert_eq!(
            ApiError::NotFound("Scientist").to_string(),
            "Scientist not found"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: ApiError = ValidationError::MissingField {
            entity: "Mission",
            field: "name",
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
