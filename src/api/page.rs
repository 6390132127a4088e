//! Bundled Page
//!
//! Serves the compiled-in HTML client with validator headers so browsers can
//! revalidate instead of refetching.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;

/// The browser client
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

// == Bundled Page ==
/// A static page plus the validators computed for it once at startup.
#[derive(Debug, Clone)]
pub struct BundledPage {
    body: &'static str,
    etag: String,
    last_modified: String,
}

impl BundledPage {
    /// Wraps `body`, deriving an ETag from its bytes and stamping
    /// Last-Modified with the current time.
    pub fn new(body: &'static str) -> Self {
        let mut hasher = DefaultHasher::new();
        body.hash(&mut hasher);

        Self {
            body,
            etag: format!("\"{:016x}\"", hasher.finish()),
            last_modified: Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        }
    }

    /// The bundled index page.
    pub fn index() -> Self {
        Self::new(INDEX_HTML)
    }

    /// Returns the page's strong ETag, quotes included.
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Builds the response, answering 304 when `If-None-Match` already names
    /// this page.
    pub fn respond(&self, request_headers: &HeaderMap) -> Response {
        let headers = [
            (header::ETAG, self.etag.as_str()),
            (header::LAST_MODIFIED, self.last_modified.as_str()),
            (header::CACHE_CONTROL, "no-cache"),
        ];

        if self.is_fresh(request_headers) {
            return (StatusCode::NOT_MODIFIED, headers).into_response();
        }

        (
            headers,
            [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)],
            self.body,
        )
            .into_response()
    }

    fn is_fresh(&self, request_headers: &HeaderMap) -> bool {
        request_headers
            .get_all(header::IF_NONE_MATCH)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .any(|tag| {
                let tag = tag.strip_prefix("W/").unwrap_or(tag);
                tag == "*" || tag == self.etag
            })
    }
}
