//! Error types and response handling for the HTTP API.
//!
//! Maps every failure to an HTTP status and a stable `error.type` string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::content::{BlobError, StoreError, UnknownKind};
use crate::session::AuthError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Blob(#[from] BlobError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{0}")]
    UnknownKind(#[from] UnknownKind),

    #[error("{what} '{key}' not found")]
    NotFound { what: &'static str, key: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(what: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            what,
            key: key.into(),
        }
    }

    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(err) => match err {
                StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                StoreError::Validation { .. }
                | StoreError::UnknownCategory(_)
                | StoreError::KindMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                StoreError::DuplicateSlug { .. } => StatusCode::CONFLICT,
                StoreError::Io { .. } | StoreError::Decode { .. } | StoreError::Encode(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Blob(err) => match err {
                BlobError::InvalidPath(_) | BlobError::Empty => StatusCode::BAD_REQUEST,
                BlobError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Auth(err) => match err {
                AuthError::Disabled => StatusCode::FORBIDDEN,
                AuthError::InvalidCredentials
                | AuthError::MissingToken
                | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            },
            ApiError::UnknownKind(_) | ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Store(err) => match err {
                StoreError::NotFound { .. } => "not_found",
                StoreError::Validation { .. } => "validation_error",
                StoreError::DuplicateSlug { .. } => "duplicate_slug",
                StoreError::UnknownCategory(_) => "unknown_category",
                StoreError::KindMismatch { .. } => "kind_mismatch",
                StoreError::Io { .. } | StoreError::Decode { .. } | StoreError::Encode(_) => {
                    "storage_error"
                }
            },
            ApiError::Blob(BlobError::Io { .. }) => "storage_error",
            ApiError::Blob(_) => "invalid_upload",
            ApiError::Auth(AuthError::Disabled) => "admin_disabled",
            ApiError::Auth(_) => "unauthorized",
            ApiError::UnknownKind(_) | ApiError::NotFound { .. } => "not_found",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }
        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
