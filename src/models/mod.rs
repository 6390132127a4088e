//! Request and Response models for the clipboard server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing structured HTTP bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::SyncRequest;
pub use responses::{EntryResponse, ErrorResponse};
