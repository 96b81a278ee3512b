//! Unified error handling.
//!
//! Provides a unified `AppError` type rendered as a JSON body of the form
//! `{"error": "<message>"}`. All route handlers return `Result<T, AppError>`.

use axum::{
    Json,
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tickoff_core::{DeadlineError, StoreError};

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// No user has the username from the `username` header.
    #[error("User not found.")]
    UserNotFound,

    /// The user has no todo with the ID from the path.
    #[error("Todo not found.")]
    TodoNotFound,

    /// A user with this username already exists.
    #[error("User with this Username already exists.")]
    UsernameTaken(String),

    /// A required field was left out of the request body.
    #[error("Missing parameter.")]
    MissingParameter,

    /// The deadline could not be parsed into a point in time.
    #[error("Invalid deadline.")]
    InvalidDeadline(#[from] DeadlineError),

    /// The request body is not acceptable JSON for this endpoint.
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// The request body could not be read, e.g. it exceeds the size limit.
    #[error("{}", .0.body_text())]
    UnreadableBody(#[from] BytesRejection),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken(username) => Self::UsernameTaken(username),
        }
    }
}

impl AppError {
    /// HTTP status code for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound | Self::TodoNotFound => StatusCode::NOT_FOUND,
            Self::UsernameTaken(_)
            | Self::MissingParameter
            | Self::InvalidDeadline(_)
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::UnreadableBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::UsernameTaken(username) => {
                tracing::debug!(%username, "Rejected duplicate username");
            }
            Self::InvalidDeadline(err) => tracing::debug!(error = %err, "Rejected deadline"),
            Self::InvalidBody(err) => tracing::debug!(error = %err, "Rejected request body"),
            Self::UnreadableBody(err) => tracing::debug!(error = %err, "Unreadable request body"),
            Self::UserNotFound | Self::TodoNotFound | Self::MissingParameter => {
                tracing::debug!(error = %self, "Request rejected");
            }
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
