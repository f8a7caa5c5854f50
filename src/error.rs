//! Error handling module
//!
//! HTTP-facing error type and its response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::ExpenseError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed body or path parameter
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The expense could not be created, whatever the cause
    #[error("{0}")]
    Rejected(ExpenseError),

    #[error(transparent)]
    Expense(#[from] ExpenseError),
}

impl AppError {
    /// Wrap a create failure so that every cause maps to 422
    pub fn rejected(err: ExpenseError) -> Self {
        Self::Rejected(err)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            // 400 Bad Request
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", Some(msg.clone()))
            }

            // 422 Unprocessable Entity
            AppError::Rejected(err) => {
                if let ExpenseError::Persistence(cause) = err {
                    tracing::error!(error = ?cause, "Failed to create expense");
                }
                (StatusCode::UNPROCESSABLE_ENTITY, "expense_rejected", None)
            }

            AppError::Expense(err) => match err {
                ExpenseError::Validation(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "validation_failed", None)
                }
                ExpenseError::NotFound(id) => {
                    (StatusCode::NOT_FOUND, "expense_not_found", Some(id.to_string()))
                }
                // 500 Internal Server Error
                ExpenseError::Persistence(cause) => {
                    tracing::error!(error = ?cause, "Persistence error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "persistence_error", None)
                }
            },
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::ports::PersistenceError;

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(AppError, StatusCode)> = vec![
            (AppError::InvalidRequest("invalid id".into()), StatusCode::BAD_REQUEST),
            (ExpenseError::NotFound(1).into(), StatusCode::NOT_FOUND),
            (
                ExpenseError::from(ValidationError::EmptyDescription).into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ExpenseError::from(PersistenceError::new("list expenses", "timeout")).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::rejected(PersistenceError::new("save expense", "timeout").into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_rejected_keeps_message() {
        let err = AppError::rejected(ValidationError::EmptyDescription.into());
        assert_eq!(err.to_string(), "description cannot be empty");
    }
}
