use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::policy::{BaselineEstimator, GuardedEvaluator, LocalHeuristicEvaluator, PolicyEvaluator, RemoteEvaluator};
use crate::repo::{self, ReadingStore};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub store: Arc<dyn ReadingStore>,
    pub evaluator: Arc<GuardedEvaluator>,
}

impl AppState {
    /// Connect the configured store and wire the evaluators.
    pub async fn new(cfg: Config) -> Result<Self> {
        let store = repo::connect(&cfg.storage).await?;
        Self::with_store(cfg, store)
    }

    pub fn with_store(cfg: Config, store: Arc<dyn ReadingStore>) -> Result<Self> {
        let baseline = BaselineEstimator::new(store.clone()).with_default(cfg.simulation.default_baseline_kwh);
        let local: Arc<dyn PolicyEvaluator> = Arc::new(LocalHeuristicEvaluator::new(baseline));

        let evaluator = if cfg.ai_service.enabled {
            let remote = RemoteEvaluator::new(&cfg.ai_service.base_url, cfg.ai_service.timeout())?;
            info!(
                endpoint = remote.endpoint(),
                timeout_ms = cfg.ai_service.timeout_ms,
                "remote simulation enabled with local fallback"
            );
            GuardedEvaluator::new(Arc::new(remote), local)
        } else {
            info!("remote simulation disabled, using local heuristic only");
            GuardedEvaluator::local_only(local)
        };

        Ok(Self {
            cfg: Arc::new(cfg),
            store,
            evaluator: Arc::new(evaluator),
        })
    }
}
