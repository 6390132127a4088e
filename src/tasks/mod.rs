//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Reaper: evicts clipboard entries nobody has touched within the idle timeout

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
