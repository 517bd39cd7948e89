//! HTTP-facing error type.
//!
//! Handlers return [`AppError`], which renders as a JSON body:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::errors::ShortenerError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload embedded in JSON error responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<ShortenerError> for AppError {
    fn from(e: ShortenerError) -> Self {
        match e {
            ShortenerError::InvalidInput => {
                AppError::bad_request("original_url must not be empty", json!({}))
            }
            ShortenerError::CodeSpaceExhausted { attempts } => {
                tracing::error!(attempts, "Short code space exhausted");
                AppError::internal(
                    "Failed to generate unique code",
                    json!({ "reason": "Too many collisions" }),
                )
            }
            ShortenerError::StoreUnavailable(source) => {
                tracing::error!(error = %source, "Mapping store failure");
                AppError::internal("Storage unavailable", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}
