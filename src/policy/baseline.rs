use std::sync::Arc;
use tracing::{debug, error};

use super::SimulationError;
use crate::domain::ReadingKind;
use crate::repo::ReadingStore;

/// Baseline used before any energy readings exist.
pub const DEFAULT_BASELINE_KWH: f64 = 850.0;

/// Anchors simulations in observed consumption: the mean of all stored
/// energy readings.
#[derive(Clone)]
pub struct BaselineEstimator {
    store: Arc<dyn ReadingStore>,
    default_kwh: f64,
}

impl BaselineEstimator {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self {
            store,
            default_kwh: DEFAULT_BASELINE_KWH,
        }
    }

    pub fn with_default(mut self, default_kwh: f64) -> Self {
        self.default_kwh = default_kwh;
        self
    }

    /// One aggregate read; storage failures are returned, not retried.
    pub async fn estimate(&self) -> Result<f64, SimulationError> {
        match self.store.mean_value(ReadingKind::Energy).await {
            Ok(Some(mean)) => {
                debug!(baseline_kwh = mean, "baseline from stored energy readings");
                Ok(mean)
            }
            Ok(None) => {
                debug!(baseline_kwh = self.default_kwh, "no energy readings, using default baseline");
                Ok(self.default_kwh)
            }
            Err(e) => {
                error!(error = %e, backend = self.store.backend(), "baseline read failed");
                Err(e.into())
            }
        }
    }
}
