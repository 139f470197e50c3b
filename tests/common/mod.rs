#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use chrono::NaiveDate;
use serde_json::Value;
use tower::util::ServiceExt;

use sustainability_dashboard::api::router;
use sustainability_dashboard::config::Config;
use sustainability_dashboard::repo::{InMemoryReadingStore, ReadingStore};
use sustainability_dashboard::seed::generate_readings;
use sustainability_dashboard::AppState;

/// Config with the remote service pointed at `remote` (or disabled).
pub fn config(remote: Option<&str>) -> Config {
    let mut cfg = Config::default();
    cfg.ai_service.enabled = remote.is_some();
    if let Some(url) = remote {
        cfg.ai_service.base_url = url.to_string();
    }
    cfg.ai_service.timeout_ms = 200;
    cfg
}

pub async fn seeded_store(days: u32) -> Arc<InMemoryReadingStore> {
    let store = Arc::new(InMemoryReadingStore::new());
    let last_day = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    store.append(&generate_readings(days, last_day, 7)).await.unwrap();
    store
}

pub fn app(cfg: Config, store: Arc<InMemoryReadingStore>) -> axum::Router {
    router(AppState::with_store(cfg, store).unwrap())
}

pub async fn get(app: axum::Router, uri: &str) -> Response<Body> {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn post_json(app: axum::Router, uri: &str, body: Value) -> Response<Body> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
