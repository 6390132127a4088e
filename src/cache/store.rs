//! Clip Store Module
//!
//! Main storage engine: a map from key to [`ClipEntry`] with lazy creation,
//! access stamping, and idle sweeping.
//!
//! The store itself is not synchronized. Callers share it behind a single
//! lock (see `AppState`) and hold that lock for the duration of each call.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{Clock, ClipEntry, SystemClock};

// == Clip Store ==
/// Key to versioned clipboard entry, stamped with the injected clock.
#[derive(Debug)]
pub struct ClipStore {
    /// Key-entry storage
    entries: HashMap<String, ClipEntry>,
    /// Time source for access stamps
    clock: Arc<dyn Clock>,
}

impl ClipStore {
    // == Constructor ==
    /// Creates an empty store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store on the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
        }
    }

    // == Get ==
    /// Returns a copy of the entry for `key`, creating an empty one if absent.
    ///
    /// Always refreshes the entry's access stamp.
    pub fn get(&mut self, key: &str) -> ClipEntry {
        let now = self.clock.now_ms();

        let entry = self.entries.entry(key.to_string()).or_default();
        entry.last_accessed = now;
        entry.clone()
    }

    // == Set ==
    /// Replaces the entry for `key` wholesale.
    ///
    /// The access stamp carried by `entry` is ignored and set to now.
    pub fn set(&mut self, key: impl Into<String>, mut entry: ClipEntry) {
        entry.last_accessed = self.clock.now_ms();
        self.entries.insert(key.into(), entry);
    }

    // == Sweep ==
    /// Removes every entry untouched for longer than `max_idle`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, max_idle: Duration) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_idle(now, max_idle));

        before - self.entries.len()
    }

    // == Peek ==
    /// Looks at an entry without creating it or touching its access stamp.
    pub fn peek(&self, key: &str) -> Option<&ClipEntry> {
        self.entries.get(key)
    }

    // == Clock ==
    /// Returns the store's time source.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ClipStore {
    fn default() -> Self {
        Self::new()
    }
}
