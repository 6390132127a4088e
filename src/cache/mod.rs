//! Cache Module
//!
//! In-memory clipboard storage: one versioned entry per key, with access-time
//! tracking used for idle eviction.

mod clock;
mod entry;
mod store;

// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::ClipEntry;
pub use store::ClipStore;

// == Public Constants ==
/// Maximum accepted request body, and therefore clipboard content, in bytes
pub const MAX_CONTENT_SIZE: usize = 1024 * 1024; // 1 MiB
