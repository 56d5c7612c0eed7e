//! Application error taxonomy and HTTP response mapping.
//!
//! Every failure surfaced to a client is one of the [`AppError`] variants.
//! Errors are logged server-side with their message text; response bodies
//! carry a stable machine-readable code plus structured details, never
//! internals such as SQL text or stack traces.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON error envelope returned to clients.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Service-level error type.
///
/// - `Validation` → 400 (malformed or missing URL / custom code)
/// - `NotFound`   → 404 (unknown or reserved short code)
/// - `Conflict`   → 409 (short code already taken)
/// - `Exhausted`  → 500 (code generator ran out of retry attempts)
/// - `Internal`   → 500 (storage or other unexpected failure)
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Exhausted { message: String, details: Value },
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

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::Exhausted {
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

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Exhausted { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "code_exhausted",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Exhausted { message, .. }
            | AppError::Internal { message, .. } => message,
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        if status.is_server_error() {
            tracing::error!(%status, code, %message, "request failed");
        } else {
            tracing::warn!(%status, code, %message, "request rejected");
        }

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Maps storage errors to the service taxonomy.
///
/// A unique violation on the `code` column is reported as `Conflict` so that
/// two concurrent creators racing the same code both get a 409, not a generic
/// 500. Everything else is an opaque `Internal` error; the SQL detail is
/// logged, not returned.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Short code already exists",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("Database error", json!({}))
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
