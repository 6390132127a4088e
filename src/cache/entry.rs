//! Clip Entry Module
//!
//! Defines the versioned clipboard slot stored under each key.

use std::time::Duration;

// == Clip Entry ==
/// One clipboard slot: content, its version, and when it was last touched.
///
/// A version of `0` means the slot has never been written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipEntry {
    /// The stored text
    pub content: String,
    /// Last-writer-wins version, `0` when unset
    pub version: i64,
    /// Last read or write (Unix milliseconds), owned by the store
    pub last_accessed: u64,
}

impl ClipEntry {
    // == Constructor ==
    /// Creates an entry with the given content and version.
    ///
    /// The access stamp is left at zero; the store overwrites it on `set`.
    pub fn new(content: impl Into<String>, version: i64) -> Self {
        Self {
            content: content.into(),
            version,
            last_accessed: 0,
        }
    }

    // == Is Unset ==
    /// Returns true if no write has ever landed on this entry.
    pub fn is_unset(&self) -> bool {
        self.version == 0
    }

    // == Idle Check ==
    /// Returns true if the entry has gone untouched for longer than `max_idle`
    /// as of `now_ms`.
    ///
    /// An entry idle for exactly `max_idle` is still considered live.
    pub fn is_idle(&self, now_ms: u64, max_idle: Duration) -> bool {
        now_ms.saturating_sub(self.last_accessed) > max_idle.as_millis() as u64
    }
}
