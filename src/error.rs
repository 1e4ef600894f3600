//! Error taxonomy shared by the catalog, scoring, registry and HTTP layers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Level number outside the catalog. Kept as text so numbers too large
    /// for `i32` still report what the caller sent.
    #[error("Unknown level: {0}")]
    NotFound(String),

    /// No database configured, or the database could not be reached in time.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Malformed request body or path segment.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Any other driver error, passed through as-is.
    #[error("Database error: {0}")]
    Storage(sqlx::Error),
}

impl AppError {
    pub fn not_configured() -> Self {
        AppError::StorageUnavailable("database not configured".into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::StorageUnavailable(_) => "storage_unavailable",
            AppError::Validation(_) => "validation",
            AppError::Storage(_) => "storage",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::StorageUnavailable(_) | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::StorageUnavailable(e.to_string())
            }
            other => AppError::Storage(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));
        (status, body).into_response()
    }
}
