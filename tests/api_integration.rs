//! Router-level tests over the in-memory store with the remote service disabled.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

use common::{app, config, get, json_body, post_json, seeded_store};
use sustainability_dashboard::repo::{InMemoryReadingStore, ReadingStore};

#[tokio::test]
async fn dashboard_groups_seeded_history_by_day() {
    let store = seeded_store(7).await;
    let resp = get(app(config(None), store), "/api/dashboard").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["time"], "2024-06-24");
    assert_eq!(days[6]["time"], "2024-06-30");
    for day in days {
        for field in ["actualEnergy", "predictedEnergy", "actualWater", "predictedWater"] {
            assert!(day[field].is_number(), "{field} missing on {}", day["time"]);
        }
    }
}

#[tokio::test]
async fn dashboard_on_empty_store_is_empty_array() {
    let resp = get(app(config(None), Arc::new(InMemoryReadingStore::new())), "/api/dashboard").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!([]));
}

#[tokio::test]
async fn simulate_without_history_uses_default_baseline() {
    let app = app(config(None), Arc::new(InMemoryReadingStore::new()));
    let resp = post_json(
        app,
        "/api/simulate",
        json!({"acTemp": 30, "reductionPercent": 50, "incentiveEnabled": true}),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-simulation-source"], "local");
    let json = json_body(resp).await;
    assert_eq!(json["energySaved"], 24990.0);
    assert_eq!(json["costSavings"], 304880.0);
    assert_eq!(json["carbonReduction"], 20492.0);
    assert_eq!(json["comfortScore"], 0.1);
    assert!(json.get("outdoorTemp").is_none());
}

#[tokio::test]
async fn simulate_anchors_on_stored_energy_mean() {
    let store = Arc::new(InMemoryReadingStore::new());
    let now = chrono::Utc::now();
    store
        .append(&[
            sustainability_dashboard::domain::SensorReading::actual(
                now,
                sustainability_dashboard::domain::ReadingKind::Energy,
                900.0,
            ),
            sustainability_dashboard::domain::SensorReading::actual(
                now,
                sustainability_dashboard::domain::ReadingKind::Energy,
                1100.0,
            ),
        ])
        .await
        .unwrap();

    let resp = post_json(
        app(config(None), store),
        "/api/simulate",
        json!({"acTemp": 22, "reductionPercent": 10, "incentiveEnabled": false}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    // mean 1000 kWh/day * 30 days * 10%
    assert_eq!(json_body(resp).await["energySaved"], 3000.0);
}

#[tokio::test]
async fn simulate_rejects_out_of_range_params() {
    let resp = post_json(
        app(config(None), Arc::new(InMemoryReadingStore::new())),
        "/api/simulate",
        json!({"acTemp": 35, "reductionPercent": 10, "incentiveEnabled": false}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"], "ValidationError");
}

#[tokio::test]
async fn simulate_rejects_missing_fields() {
    let resp = post_json(
        app(config(None), Arc::new(InMemoryReadingStore::new())),
        "/api/simulate",
        json!({"acTemp": 24}),
    )
    .await;
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn simulate_storage_outage_is_500() {
    let store = Arc::new(InMemoryReadingStore::new());
    store.set_available(false);
    let resp = post_json(
        app(config(None), store),
        "/api/simulate",
        json!({"acTemp": 24, "reductionPercent": 10, "incentiveEnabled": false}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(resp).await["message"], "An internal error occurred");
}

#[tokio::test]
async fn recommendations_are_static_and_ordered() {
    let app = app(config(None), Arc::new(InMemoryReadingStore::new()));
    let first = json_body(get(app.clone(), "/api/recommendations").await).await;
    let second = json_body(get(app, "/api/recommendations").await).await;
    assert_eq!(first, second);

    let ids: Vec<u64> = first
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn health_reflects_storage() {
    let store = Arc::new(InMemoryReadingStore::new());
    let app = app(config(None), store.clone());

    let resp = get(app.clone(), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["detail"], "memory");
    assert_eq!(json["checks"]["aiService"]["status"], "disabled");

    store.set_available(false);
    assert_eq!(get(app.clone(), "/health").await.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(get(app.clone(), "/health/ready").await.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(get(app, "/health/live").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn seeded_count_matches_days() {
    let store = seeded_store(3).await;
    assert_eq!(store.count().await.unwrap(), 12);
}
