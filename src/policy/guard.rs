use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use strum::{Display, IntoStaticStr};
use tracing::{info, warn};

use super::{PolicyEvaluator, SimulationError};
use crate::domain::{SimulationParams, SimulationResult};

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EvaluationSource {
    /// The remote service answered.
    Remote,
    /// The remote service failed and the local heuristic answered.
    Fallback,
    /// No remote service is configured.
    Local,
}

impl EvaluationSource {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub result: SimulationResult,
    pub source: EvaluationSource,
}

/// Delegates to the remote evaluator and falls back to the local one when
/// the remote fails. The fallback decision is made per call.
pub struct GuardedEvaluator {
    remote: Option<Arc<dyn PolicyEvaluator>>,
    local: Arc<dyn PolicyEvaluator>,
}

impl GuardedEvaluator {
    pub fn new(remote: Arc<dyn PolicyEvaluator>, local: Arc<dyn PolicyEvaluator>) -> Self {
        Self {
            remote: Some(remote),
            local,
        }
    }

    pub fn local_only(local: Arc<dyn PolicyEvaluator>) -> Self {
        Self { remote: None, local }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Evaluate and report which path served the call.
    ///
    /// Remote failures never reach the caller. Only a failure of the local
    /// path itself (storage outage) is returned.
    pub async fn evaluate_with_source(&self, params: &SimulationParams) -> Result<Evaluation, SimulationError> {
        let Some(remote) = &self.remote else {
            let result = self.local.evaluate(params).await?;
            return Ok(Evaluation {
                result,
                source: EvaluationSource::Local,
            });
        };

        match remote.evaluate(params).await {
            Ok(result) => {
                info!(evaluator = remote.name(), "simulation served by remote evaluator");
                Ok(Evaluation {
                    result,
                    source: EvaluationSource::Remote,
                })
            }
            Err(e) => {
                warn!(
                    error = %e,
                    evaluator = remote.name(),
                    fallback = self.local.name(),
                    "remote simulation failed, falling back to local heuristic"
                );
                let result = self.local.evaluate(params).await?;
                info!(evaluator = self.local.name(), "simulation served by fallback evaluator");
                Ok(Evaluation {
                    result,
                    source: EvaluationSource::Fallback,
                })
            }
        }
    }
}

#[async_trait]
impl PolicyEvaluator for GuardedEvaluator {
    async fn evaluate(&self, params: &SimulationParams) -> Result<SimulationResult, SimulationError> {
        self.evaluate_with_source(params).await.map(|e| e.result)
    }

    fn name(&self) -> &'static str {
        "guarded"
    }
}
