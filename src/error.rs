//! Error types for the clipboard server
//!
//! Provides unified error handling using thiserror. Every variant is a
//! client input problem caught before the store is touched.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Sync Error Enum ==
/// Unified error type for the clipboard server.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Request body exceeded the configured cap (bytes)
    #[error("Request body exceeds maximum size of {0} bytes")]
    PayloadTooLarge(usize),

    /// Body could not be decoded (bad JSON, non-UTF-8 text)
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Transport failure while reading the body
    #[error("Failed to read request body: {0}")]
    BodyRead(String),
}

impl SyncError {
    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            SyncError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            SyncError::InvalidPayload(_) | SyncError::BodyRead(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for SyncError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));
        (self.status(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the clipboard server.
pub type Result<T> = std::result::Result<T, SyncError>;
