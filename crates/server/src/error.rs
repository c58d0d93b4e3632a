//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server faults to Sentry
//! before responding to the client. Route handlers return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::SessionError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Session token issuance failed (deployment fault).
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Feed source query failed. Unlike other store faults this responds
    /// with a JSON payload carrying the store error text, since nothing
    /// secret flows through the feed path.
    #[error("Feed error: {0}")]
    Feed(RepositoryError),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User lacks permission.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server faults to Sentry
        if matches!(
            self,
            Self::Database(_) | Self::Session(_) | Self::Feed(_) | Self::Internal(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        match self {
            Self::Feed(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Failed to generate product feed",
                    "details": err.to_string(),
                })),
            )
                .into_response(),
            // Don't expose internal error details to clients
            Self::Database(_) | Self::Session(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
                .into_response(),
            Self::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, message).into_response()
            }
            Self::Forbidden(message) => (StatusCode::FORBIDDEN, message).into_response(),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
        }
    }
}
