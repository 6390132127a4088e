//! Sync Protocol
//!
//! Every function here takes `&mut ClipStore`, so a caller holding the
//! store's write lock runs the whole read-compare-write under one acquisition.

use std::cmp::Ordering;

use crate::cache::{ClipEntry, ClipStore};

// == Sync Outcome ==
/// Result of reconciling a structured submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The client is behind. Carries the authoritative entry for it to adopt.
    Conflict(ClipEntry),
    /// The key had never been written and took the client's payload.
    Adopted,
    /// The client was ahead and its payload replaced the stored one.
    Updated,
    /// Versions already match; nothing changed.
    InSync,
}

impl SyncOutcome {
    /// Returns true if the store was written.
    pub fn is_write(&self) -> bool {
        matches!(self, SyncOutcome::Adopted | SyncOutcome::Updated)
    }
}

// == Reconcile ==
/// Applies a structured client's `(version, content)` to `key`.
///
/// | client vs stored              | effect          |
/// |-------------------------------|-----------------|
/// | older                         | conflict        |
/// | equal, stored never written   | adopt payload   |
/// | equal, stored written         | no-op           |
/// | newer                         | replace         |
pub fn reconcile(store: &mut ClipStore, key: &str, submitted: ClipEntry) -> SyncOutcome {
    let stored = store.get(key);

    match submitted.version.cmp(&stored.version) {
        Ordering::Less => SyncOutcome::Conflict(stored),
        Ordering::Equal if stored.is_unset() => {
            store.set(key, submitted);
            SyncOutcome::Adopted
        }
        Ordering::Equal => SyncOutcome::InSync,
        Ordering::Greater => {
            store.set(key, submitted);
            SyncOutcome::Updated
        }
    }
}

// == Raw Overwrite ==
/// Unconditionally replaces the content of `key` and stamps a new version.
///
/// The new version is the current Unix second, bumped past the stored
/// version if a client already used a larger number. Returns that version.
pub fn overwrite_raw(store: &mut ClipStore, key: &str, content: String) -> i64 {
    let stored = store.get(key);
    let now = i64::try_from(store.clock().now_secs()).unwrap_or(i64::MAX);
    let version = now.max(stored.version.saturating_add(1));

    store.set(key, ClipEntry::new(content, version));
    version
}

// == Raw Read ==
/// Returns the content of `key` with no version information.
pub fn read_raw(store: &mut ClipStore, key: &str) -> String {
    store.get(key).content
}
