//! Response DTOs for the clipboard server API
//!
//! Defines the structure of outgoing structured response bodies.

use serde::Serialize;

use crate::cache::ClipEntry;

/// Authoritative entry sent back to a structured client on conflict.
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    /// The stored text
    pub content: String,
    /// The stored version
    pub version: i64,
}

impl From<ClipEntry> for EntryResponse {
    fn from(entry: ClipEntry) -> Self {
        Self {
            content: entry.content,
            version: entry.version,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
