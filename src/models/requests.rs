//! Request DTOs for the clipboard server API
//!
//! Defines the structure of incoming structured request bodies.

use serde::Deserialize;

use crate::cache::ClipEntry;

/// Body of a structured sync submission (browser POST).
///
/// Missing fields default to empty content and version `0`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncRequest {
    /// The client's current text
    #[serde(default)]
    pub content: String,
    /// The client's version of that text
    #[serde(default)]
    pub version: i64,
}

impl SyncRequest {
    /// Converts the submission into a store entry.
    pub fn into_entry(self) -> ClipEntry {
        ClipEntry::new(self.content, self.version)
    }
}
