use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::debug;

use super::{PolicyEvaluator, SimulationError};
use crate::domain::{SimulationParams, SimulationResult};

/// Client for the external simulation service (`POST {base_url}/simulate`).
///
/// The service returns the same result shape, optionally with `outdoorTemp`.
/// Its numbers are passed through untouched.
#[derive(Clone)]
pub struct RemoteEvaluator {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteEvaluator {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("sustainability-dashboard/", env!("CARGO_PKG_VERSION"))),
        );
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/simulate", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PolicyEvaluator for RemoteEvaluator {
    async fn evaluate(&self, params: &SimulationParams) -> Result<SimulationResult, SimulationError> {
        debug!(endpoint = %self.endpoint, "delegating simulation to remote service");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(params)
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() { "timed out" } else { "request failed" };
                SimulationError::RemoteUnavailable(format!("{kind}: {e}"))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SimulationError::RemoteUnavailable(format!("HTTP {status}: {body}")));
        }

        resp.json::<SimulationResult>()
            .await
            .map_err(|e| SimulationError::RemoteUnavailable(format!("invalid response body: {e}")))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
