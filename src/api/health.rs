use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::time::Instant;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    checks: HealthChecks,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    storage: ComponentHealth,
    ai_service: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ComponentHealth {
    fn healthy(latency_ms: u64, detail: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            latency_ms: Some(latency_ms),
            detail: Some(detail.into()),
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            latency_ms: None,
            detail: Some(error),
        }
    }

    /// Configured state only; the remote service is not probed.
    fn configured(enabled: bool) -> Self {
        Self {
            status: if enabled { "enabled" } else { "disabled" }.to_string(),
            latency_ms: None,
            detail: None,
        }
    }

    fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// GET /health - storage connectivity plus remote-service configuration
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let storage = check_storage(&state).await;
    let ai_service = ComponentHealth::configured(state.evaluator.has_remote());

    let all_healthy = storage.is_healthy();
    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        timestamp: chrono::Utc::now(),
        checks: HealthChecks { storage, ai_service },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    tracing::debug!(healthy = all_healthy, "health check completed");
    (status_code, Json(response))
}

async fn check_storage(state: &AppState) -> ComponentHealth {
    let start = Instant::now();
    match state.store.ping().await {
        Ok(()) => ComponentHealth::healthy(start.elapsed().as_millis() as u64, state.store.backend()),
        Err(e) => ComponentHealth::unhealthy(e.to_string()),
    }
}

/// GET /health/ready - 200 once storage answers
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health/live - 200 while the process runs
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_health_healthy() {
        let health = ComponentHealth::healthy(42, "memory");
        assert!(health.is_healthy());
        assert_eq!(health.latency_ms, Some(42));
        assert_eq!(health.detail.as_deref(), Some("memory"));
    }

    #[test]
    fn test_component_health_unhealthy() {
        let health = ComponentHealth::unhealthy("Connection failed".to_string());
        assert!(!health.is_healthy());
        assert!(health.latency_ms.is_none());
        assert_eq!(health.detail, Some("Connection failed".to_string()));
    }

    #[test]
    fn test_configured_component() {
        assert_eq!(ComponentHealth::configured(true).status, "enabled");
        assert_eq!(ComponentHealth::configured(false).status, "disabled");
    }
}
