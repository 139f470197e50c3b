pub mod dashboard;
pub mod error;
pub mod health;
pub mod recommendations;
pub mod simulate;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::warn;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let server = state.cfg.server.clone();

    let api = Router::new()
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/simulate", post(simulate::run_simulation))
        .route("/recommendations", get(recommendations::list_recommendations));

    let mut router = Router::new()
        .nest("/api", api)
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .with_state(state);

    if server.enable_cors {
        match server.cors_origin.parse::<HeaderValue>() {
            Ok(origin) => {
                let cors = CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE])
                    .expose_headers([simulate::SIMULATION_SOURCE_HEADER]);
                router = router.layer(cors);
            }
            Err(e) => warn!(origin = %server.cors_origin, error = %e, "invalid CORS origin, CORS disabled"),
        }
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs))),
        )
        .layer(TraceLayer::new_for_http())
}
