//! Clipsync - A tiny shared clipboard server
//!
//! Lets browsers and scripts share text under a URL path, with
//! last-writer-wins version checks and eviction of idle keys.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod sync;
pub mod tasks;

pub use api::AppState;
pub use config::{Cli, Config};
pub use tasks::{spawn_reaper, ReaperHandle};
