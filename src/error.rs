//! Application error type and its HTTP mapping.
//!
//! Every fallible layer (repositories, services, handlers) returns [`AppError`].
//! Handlers return it directly; axum turns it into a plain-text response via
//! [`IntoResponse`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors produced while shortening or resolving URLs.
#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted URL or request body is malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// No mapping exists for the requested short code.
    #[error("URL not found")]
    NotFound,

    /// The mapping store returned an error or could not be reached.
    #[error("storage failure: {0}")]
    StorageFailure(String),

    /// The mapping store could not be reached at startup.
    #[error("failed to connect to store: {0}")]
    ConnectionFailure(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageFailure(message.into())
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionFailure(message.into())
    }

    /// HTTP status for this error.
    ///
    /// Storage failures are reported as `400 Bad Request`, the same status the
    /// shorten endpoint uses for invalid input.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::StorageFailure(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::ConnectionFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::storage(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
