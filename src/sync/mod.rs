//! Sync Module
//!
//! Reconciles a client's view of a clipboard key against the stored entry.
//!
//! Two write paths share the same entries:
//! - structured clients submit `(version, content)` and get last-writer-wins
//!   by version, with a conflict outcome when they are behind;
//! - raw clients overwrite unconditionally and the server stamps a fresh
//!   version, so structured clients see raw writes as ordinary version bumps.

mod protocol;


pub use protocol::{overwrite_raw, read_raw, reconcile, SyncOutcome};
