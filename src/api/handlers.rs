//! API Handlers
//!
//! HTTP request handlers for the clipboard endpoints. Every path is a key;
//! the handler picks the structured or raw protocol from the User-Agent.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use crate::api::client::{is_rich_client, ClientClassifier};
use crate::api::page::BundledPage;
use crate::cache::{ClipStore, MAX_CONTENT_SIZE};
use crate::error::{Result, SyncError};
use crate::models::{EntryResponse, SyncRequest};
use crate::sync::{overwrite_raw, read_raw, reconcile, SyncOutcome};

/// Application state shared across all handlers.
///
/// Contains the clip store wrapped in Arc<RwLock<>> for thread-safe access.
/// Every store call happens under the write lock, since even a read creates
/// entries and refreshes access stamps.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe clip store
    pub store: Arc<RwLock<ClipStore>>,
    /// Browser detection
    pub classify: ClientClassifier,
    /// Page served to browsers
    pub page: Arc<BundledPage>,
    /// Largest accepted request body, in bytes
    pub max_body_size: usize,
}

impl AppState {
    /// Creates a new AppState around the given store with default settings.
    pub fn new(store: ClipStore) -> Self {
        Self::with_shared_store(Arc::new(RwLock::new(store)))
    }

    /// Creates a new AppState around an already shared store.
    pub fn with_shared_store(store: Arc<RwLock<ClipStore>>) -> Self {
        Self {
            store,
            classify: is_rich_client,
            page: Arc::new(BundledPage::index()),
            max_body_size: MAX_CONTENT_SIZE,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            max_body_size: config.max_body_size,
            ..Self::new(ClipStore::new())
        }
    }

    /// Replaces the browser classifier.
    pub fn with_classifier(mut self, classify: ClientClassifier) -> Self {
        self.classify = classify;
        self
    }

    fn is_rich(&self, headers: &HeaderMap) -> bool {
        // Lossy so agents carrying non-ASCII bytes still match on their markers.
        let user_agent = headers
            .get(header::USER_AGENT)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
            .unwrap_or_default();
        (self.classify)(&user_agent)
    }
}

/// Handler for GET on any path
///
/// Browsers get the bundled page; everyone else gets the raw content.
pub async fn read_handler(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    if state.is_rich(&headers) {
        return state.page.respond(&headers);
    }

    let content = {
        let mut store = state.store.write().await;
        read_raw(&mut store, uri.path())
    };

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        content,
    )
        .into_response()
}

/// Handler for POST on any path
///
/// Browsers submit `{content, version}` and are reconciled; everyone else
/// overwrites the content unconditionally.
pub async fn sync_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Response> {
    let key = uri.path();
    let body = body.map_err(|rejection| {
        let err = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => SyncError::PayloadTooLarge(state.max_body_size),
            _ => SyncError::BodyRead(rejection.body_text()),
        };
        warn!("Rejected body for {}: {}", key, err);
        err
    })?;

    if !state.is_rich(&headers) {
        let content = String::from_utf8(body.to_vec()).map_err(|e| {
            warn!("Rejected non-UTF-8 raw body for {}", key);
            SyncError::InvalidPayload(e.to_string())
        })?;

        let version = {
            let mut store = state.store.write().await;
            overwrite_raw(&mut store, key, content)
        };
        debug!("Raw write to {} stamped version {}", key, version);
        return Ok(StatusCode::OK.into_response());
    }

    let request: SyncRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected sync payload for {}: {}", key, e);
        SyncError::InvalidPayload(e.to_string())
    })?;

    let outcome = {
        let mut store = state.store.write().await;
        reconcile(&mut store, key, request.into_entry())
    };

    match outcome {
        SyncOutcome::Conflict(current) => {
            debug!(
                "Stale sync for {}, server holds version {}",
                key, current.version
            );
            Ok((StatusCode::CONFLICT, Json(EntryResponse::from(current))).into_response())
        }
        outcome => {
            if outcome.is_write() {
                debug!("Sync for {} accepted ({:?})", key, outcome);
            }
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// Handler for every other method
pub async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}
