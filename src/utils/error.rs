//! Error handling module
//!
//! Defines error types and handling logic used in the project

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed request field
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request body over the configured size limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Backend has no credential configured
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Backend call failed (network, quota, malformed response)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Generation task failed unexpectedly
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable message
    pub error: String,
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Backend(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) | AppError::PayloadTooLarge => "invalid_request_error",
            AppError::Timeout => "timeout_error",
            AppError::BackendUnavailable(_) => "backend_unavailable",
            AppError::Backend(_) => "backend_error",
            AppError::Internal(_) => "api_error",
        }
    }

    /// Message returned to HTTP callers
    fn public_message(&self) -> String {
        match self {
            AppError::InvalidRequest(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Convert to the JSON error body
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.public_message(),
            error_type: self.error_type().to_string(),
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self.error_type(), status);
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create invalid request error
    pub fn invalid_request(message: impl Into<String>) -> AppError {
        AppError::InvalidRequest(message.into())
    }

    /// Create backend unavailable error
    pub fn backend_unavailable(backend: impl Into<String>) -> AppError {
        AppError::BackendUnavailable(format!("{} not configured", backend.into()))
    }

    /// Create backend call error
    pub fn backend_error(message: impl Into<String>) -> AppError {
        AppError::Backend(message.into())
    }
}

/// Error context extension trait
pub trait ErrorContext<T> {
    /// Add backend error context
    fn backend_context(self, message: &str) -> AppResult<T>;

    /// Add internal error context
    fn internal_context(self, message: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn backend_context(self, message: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Backend(format!("{}: {}", message, e)))
    }

    fn internal_context(self, message: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Internal(format!("{}: {}", message, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::InvalidRequest("test".to_string()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Timeout.status_code(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(AppError::Backend("test".to_string()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::Internal("test".to_string()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_request_message_is_verbatim() {
        let error = AppError::InvalidRequest("Prompt is required".to_string());
        let body = error.to_error_response();

        assert_eq!(body.error, "Prompt is required");
        assert_eq!(body.error_type, "invalid_request_error");
    }

    #[test]
    fn test_error_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset"
        ));

        match result.backend_context("OpenAI request failed") {
            Err(AppError::Backend(msg)) => {
                assert!(msg.contains("OpenAI request failed"));
                assert!(msg.contains("connection reset"));
            }
            _ => panic!("Expected backend error"),
        }
    }
}
