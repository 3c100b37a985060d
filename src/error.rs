//! # Centralized Error Handling
//!
//! One error type for every handler, converted to an HTTP response in a
//! single place. Bodies are plain text, matching the narrative responses of
//! the successful paths.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::services::store::StoreError;

/// Central application error type.
///
/// Store errors are logged when turned into a response; client errors are
/// logged (if at all) where they are created.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("store error")]
    Store(#[from] StoreError),

    #[error("not found: {0}")]
    NotFound(&'static str),

    #[error("bad request: {0}")]
    BadRequest(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(e) = &self {
            error!(?e, "Store error occurred");
        }

        let (status, message) = match self {
            AppError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, message).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
