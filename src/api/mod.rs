//! API Module
//!
//! HTTP handlers and routing for the clipboard server.
//!
//! # Endpoints
//! Every path names one clipboard key.
//! - `GET <path>` - browsers get the bundled page, others get the raw content
//! - `POST <path>` - browsers sync `{content, version}`, others overwrite
//! - anything else - 404

pub mod client;
pub mod handlers;
pub mod page;
pub mod routes;

pub use client::{is_rich_client, ClientClassifier};
pub use handlers::*;
pub use page::BundledPage;
pub use routes::create_router;
