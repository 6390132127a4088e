//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles through the router for both the
//! structured (browser) and raw (script) protocols.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use clipsync::{
    api::create_router,
    cache::{ClipEntry, ClipStore, ManualClock},
    AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const BROWSER: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
const CURL: &str = "curl/8.5.0";

// == Helper Functions ==

fn create_test_state() -> (AppState, ManualClock) {
    // 2024-01-01T00:00:00Z
    let clock = ManualClock::new(1_704_067_200_000);
    let store = ClipStore::with_clock(Arc::new(clock.clone()));
    (AppState::new(store), clock)
}

fn create_test_app() -> (Router, AppState) {
    let (state, _) = create_test_state();
    (create_router(state.clone()), state)
}

fn get(uri: &str, agent: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::USER_AGENT, agent)
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, agent: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::USER_AGENT, agent)
        .body(body.into())
        .unwrap()
}

fn post_sync(uri: &str, content: &str, version: i64) -> Request<Body> {
    let body = json!({ "content": content, "version": version }).to_string();
    post(uri, BROWSER, body)
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn stored(state: &AppState, key: &str) -> Option<ClipEntry> {
    state.store.read().await.peek(key).cloned()
}

// == Structured Sync Tests ==

#[tokio::test]
async fn test_first_sync_then_reads() {
    let (app, _) = create_test_app();

    let response = app.clone().oneshot(post_sync("/k", "a", 0)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/k", BROWSER)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert!(body_to_string(response.into_body()).await.contains("<textarea"));

    let response = app.oneshot(get("/k", CURL)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_string(response.into_body()).await, "a");
}

#[tokio::test]
async fn test_stale_sync_conflicts() {
    let (app, state) = create_test_app();
    state.store.write().await.set("/k", ClipEntry::new("a", 5));

    let response = app.oneshot(post_sync("/k", "b", 3)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, json!({ "content": "a", "version": 5 }));

    let entry = stored(&state, "/k").await.unwrap();
    assert_eq!((entry.content.as_str(), entry.version), ("a", 5));
}

#[tokio::test]
async fn test_newer_sync_replaces() {
    let (app, state) = create_test_app();
    state.store.write().await.set("/k", ClipEntry::new("a", 5));

    let response = app.oneshot(post_sync("/k", "b", 6)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let entry = stored(&state, "/k").await.unwrap();
    assert_eq!((entry.content.as_str(), entry.version), ("b", 6));
}

#[tokio::test]
async fn test_repeated_sync_is_noop() {
    let (app, state) = create_test_app();

    for _ in 0..2 {
        let response = app.clone().oneshot(post_sync("/k", "same", 9)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
    let response = app.oneshot(post_sync("/k", "changed", 9)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(stored(&state, "/k").await.unwrap().content, "same");
}

#[tokio::test]
async fn test_invalid_json_request() {
    let (app, state) = create_test_app();

    let response = app.oneshot(post("/k", BROWSER, "{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("Invalid payload"));
    assert!(stored(&state, "/k").await.is_none());
}

#[tokio::test]
async fn test_keys_are_independent() {
    let (app, _) = create_test_app();

    app.clone().oneshot(post_sync("/one", "1", 10)).await.unwrap();
    app.clone().oneshot(post_sync("/two", "2", 10)).await.unwrap();

    let one = app.clone().oneshot(get("/one", CURL)).await.unwrap();
    let two = app.oneshot(get("/two", CURL)).await.unwrap();
    assert_eq!(body_to_string(one.into_body()).await, "1");
    assert_eq!(body_to_string(two.into_body()).await, "2");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_syncs_keep_highest_version() {
    let (app, state) = create_test_app();
    let versions: Vec<i64> = (1..=32).collect();

    let tasks: Vec<_> = versions
        .iter()
        .map(|&version| {
            let app = app.clone();
            tokio::spawn(async move {
                let content = format!("v{}", version);
                let response = app.oneshot(post_sync("/k", &content, version)).await.unwrap();
                let status = response.status();
                let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                    .await
                    .unwrap();
                (version, status, body)
            })
        })
        .collect();

    for task in tasks {
        let (version, status, body) = task.await.unwrap();
        match status {
            StatusCode::NO_CONTENT => {}
            StatusCode::CONFLICT => {
                let current: Value = serde_json::from_slice(&body).unwrap();
                let held = current["version"].as_i64().unwrap();
                assert!(held > version, "conflict for {} reported {}", version, held);
                assert_eq!(current["content"], format!("v{}", held));
            }
            other => panic!("unexpected status {} for version {}", other, version),
        }
    }

    let entry = stored(&state, "/k").await.unwrap();
    assert_eq!(entry.version, 32);
    assert_eq!(entry.content, "v32");
}

// == Raw Client Tests ==

#[tokio::test]
async fn test_raw_post_overwrites_regardless_of_history() {
    let (app, state) = create_test_app();
    state
        .store
        .write()
        .await
        .set("/k", ClipEntry::new("old", 9_000_000_000));

    let response = app.clone().oneshot(post("/k", CURL, "x")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_to_string(response.into_body()).await.is_empty());

    let response = app.oneshot(get("/k", CURL)).await.unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_to_string(response.into_body()).await, "x");
    assert_eq!(stored(&state, "/k").await.unwrap().version, 9_000_000_001);
}

#[tokio::test]
async fn test_raw_write_stamps_current_second() {
    let (app, state) = create_test_app();

    app.oneshot(post("/k", CURL, "x")).await.unwrap();

    assert_eq!(stored(&state, "/k").await.unwrap().version, 1_704_067_200);
}

#[tokio::test]
async fn test_browser_sees_raw_write_as_conflict() {
    let (app, _) = create_test_app();

    app.clone().oneshot(post_sync("/k", "a", 100)).await.unwrap();
    app.clone().oneshot(post("/k", CURL, "from script")).await.unwrap();

    let response = app.oneshot(post_sync("/k", "a", 100)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["content"], "from script");
}

#[tokio::test]
async fn test_missing_user_agent_is_raw() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/fresh").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_string(response.into_body()).await, "");
}

#[tokio::test]
async fn test_oversized_raw_body_rejected() {
    let (app, state) = create_test_app();
    let big = "x".repeat(clipsync::cache::MAX_CONTENT_SIZE + 1);

    let response = app.oneshot(post("/k", CURL, big)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(stored(&state, "/k").await.is_none());
}

// == Page Caching Tests ==

#[tokio::test]
async fn test_page_revalidation() {
    let (app, _) = create_test_app();

    let response = app.clone().oneshot(get("/k", BROWSER)).await.unwrap();
    let etag = response.headers()[header::ETAG].clone();
    assert!(response.headers().contains_key(header::LAST_MODIFIED));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/k")
                .header(header::USER_AGENT, BROWSER)
                .header(header::IF_NONE_MATCH, etag)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
}

// == Method Tests ==

#[tokio::test]
async fn test_unsupported_method_not_found() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/k")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Eviction Tests ==

#[tokio::test]
async fn test_evicted_key_comes_back_empty() {
    let (state, clock) = create_test_state();
    let app = create_router(state.clone());

    app.clone().oneshot(post_sync("/k", "a", 5)).await.unwrap();

    clock.advance(Duration::from_secs(24 * 3600) + Duration::from_millis(1));
    let removed = state
        .store
        .write()
        .await
        .sweep(Duration::from_secs(24 * 3600));
    assert_eq!(removed, 1);

    let response = app.clone().oneshot(get("/k", CURL)).await.unwrap();
    assert_eq!(body_to_string(response.into_body()).await, "");

    // Fresh entry is back at version 0, so a zero-version sync is adopted.
    let response = app.clone().oneshot(post_sync("/k", "new", 0)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(stored(&state, "/k").await.unwrap().content, "new");
}
