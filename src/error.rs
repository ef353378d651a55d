//! # Error Handling
//!
//! This module defines the application error type and handles converting it
//! into HTTP responses.
//!
//! ## Error Policy
//! - 401/403 carry a `{"message": ...}` body the frontend displays verbatim.
//! - Absent single resources are NOT errors: those handlers return `null`
//!   with HTTP 200, so there is no NotFound variant here.
//! - Everything store-related (driver failures, malformed ObjectIds, BSON
//!   conversion) surfaces as a generic 500. The detailed error is logged
//!   server-side and never leaks into the response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type
///
/// The `#[from]` attributes let the `?` operator convert driver and token
/// errors into `AppError` automatically. Token *verification* failures are
/// not routed through `Token` — the auth guard maps those to `Unauthorized`
/// explicitly; `Token` only covers signing failures at issuance.
#[derive(Error, Debug)]
pub enum AppError {
    /// Document store errors (driver-level: connectivity, write failures)
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A path parameter that must be a store identifier failed to parse
    #[error("Invalid document id: {0}")]
    InvalidId(#[from] mongodb::bson::oid::Error),

    /// BSON conversion errors when turning request payloads into documents
    #[error("Serialization error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),

    /// Session token signing errors
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Missing or invalid session credential (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Verified identity does not own the requested resource (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unexpected errors that shouldn't normally occur (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert AppError into an HTTP response
///
/// Handlers return `Result<T, AppError>` and axum converts failures through
/// this impl. Server-side failures are logged here with their full detail,
/// then collapsed into a generic message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::InvalidId(e) => {
                tracing::error!("Invalid document id: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Bson(e) => {
                tracing::error!("BSON serialization error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Token(e) => {
                tracing::error!("Token error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            // Safe to show to callers: these are the documented 401/403 bodies
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
