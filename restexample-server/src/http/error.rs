//! API error types with IntoResponse
//!
//! Every error becomes a bare status code with no body. Infrastructure
//! failures are logged with their cause; client mistakes are not.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Bad id or body (400)
    Validation(ValidationError),

    /// No matching row (404)
    NotFound { resource: &'static str, id: String },

    /// Acquire or statement failure (500, logged)
    Database(DbError),

    /// Response serialization failure (500, logged)
    Encode(serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => tracing::debug!("rejected request: {}", e),
            Self::NotFound { resource, id } => tracing::debug!("{} '{}' not found", resource, id),
            Self::Database(e) => tracing::error!("{}", e),
            Self::Encode(e) => tracing::error!("unable to encode json: {}", e),
        }

        self.status().into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
