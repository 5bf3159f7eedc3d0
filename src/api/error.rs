//! Error payloads returned by the HTTP boundary.
//!
//! Handlers convert service failures into an [`ApiErrorResponse`], which
//! pairs an HTTP status code with a machine-readable error body. Store
//! failures are logged and collapsed into a generic internal error so
//! persistence details never reach clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::task::domain::TaskId;
use crate::task::services::TaskLifecycleError;

/// Machine-readable error body serialized to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    /// Stable error code, such as `NOT_FOUND` or `VALIDATION_ERROR`.
    pub code: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ApiError {
    /// Creates an error body from a code and message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Error body for a missing resource.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    /// Error body for a request that failed validation.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Error body for an unexpected internal failure.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// An HTTP status code paired with the [`ApiError`] body to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorResponse {
    /// Status code for the response.
    pub status: StatusCode,
    /// Serialized error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a response from a status code and error body.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// `404 Not Found` for an unknown task identifier.
    #[must_use]
    pub fn task_not_found(id: TaskId) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ApiError::not_found(format!("Task with id {id} not found")),
        )
    }

    /// `422 Unprocessable Entity` for a request that failed validation.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::validation(message),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TaskLifecycleError> for ApiErrorResponse {
    fn from(error: TaskLifecycleError) -> Self {
        match error {
            TaskLifecycleError::Domain(domain_error) => Self::validation(domain_error.to_string()),
            TaskLifecycleError::Store(store_error) => {
                tracing::error!(error = %store_error, "task store operation failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::internal("internal server error"),
                )
            }
        }
    }
}
