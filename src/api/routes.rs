//! API Routes
//!
//! Configures the Axum router so that every path is a clipboard key.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{not_found_handler, read_handler, sync_handler, AppState};

/// Creates the main router.
///
/// `GET` and `POST` are served on `/` and on every other path; all other
/// methods, `HEAD` included, get 404 rather than 405.
///
/// # Middleware
/// - Body limit: request bodies above `AppState::max_body_size` are refused
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_body_size;

    // Without an explicit HEAD route axum would answer HEAD with the GET handler.
    let clipboard: MethodRouter<AppState> = get(read_handler)
        .head(not_found_handler)
        .post(sync_handler)
        .fallback(not_found_handler);

    Router::new()
        .route("/", clipboard.clone())
        .route("/*key", clipboard)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
