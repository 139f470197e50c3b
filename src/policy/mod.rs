//! HVAC policy evaluation.
//!
//! [`simulate`] is the one copy of the impact formula. [`LocalHeuristicEvaluator`]
//! anchors it on the stored baseline, [`RemoteEvaluator`] delegates to the
//! external simulation service, and [`GuardedEvaluator`] tries the remote first
//! and falls back to the local path on any remote failure.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{SimulationParams, SimulationResult};
use crate::repo::StoreError;

pub mod baseline;
pub mod guard;
pub mod heuristic;
pub mod remote;

pub use baseline::{BaselineEstimator, DEFAULT_BASELINE_KWH};
pub use guard::{Evaluation, EvaluationSource, GuardedEvaluator};
pub use heuristic::{comfort_score, simulate, LocalHeuristicEvaluator};
pub use remote::RemoteEvaluator;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// Baseline read failed. Not retried.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Network error, timeout, non-2xx or undecodable body from the remote service.
    #[error("remote simulation service unavailable: {0}")]
    RemoteUnavailable(String),
}

impl From<StoreError> for SimulationError {
    fn from(error: StoreError) -> Self {
        SimulationError::StorageUnavailable(error.to_string())
    }
}

/// Something that can estimate the impact of an HVAC policy.
#[async_trait]
pub trait PolicyEvaluator: Send + Sync {
    async fn evaluate(&self, params: &SimulationParams) -> Result<SimulationResult, SimulationError>;

    fn name(&self) -> &'static str;
}
