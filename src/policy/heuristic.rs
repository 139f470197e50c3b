use async_trait::async_trait;
use tracing::debug;

use super::{BaselineEstimator, PolicyEvaluator, SimulationError};
use crate::domain::{SimulationParams, SimulationResult};

/// Setpoint the baseline consumption was observed at.
pub const REFERENCE_SETPOINT_C: f64 = 22.0;
/// Fraction of load saved per °C above the reference setpoint.
pub const SAVINGS_PER_DEGREE: f64 = 0.06;
/// Days in a billing period; the baseline is a daily figure.
pub const BILLING_DAYS: f64 = 30.0;
pub const TARIFF_PER_KWH: f64 = 12.0;
/// Flat DISCOM demand-response rebate.
pub const DISCOM_INCENTIVE: f64 = 5000.0;
/// Grid emission factor, kg CO2 per kWh.
pub const CARBON_KG_PER_KWH: f64 = 0.82;

pub const COMFORT_SETPOINT_C: f64 = 24.0;
pub const COMFORT_PENALTY_PER_DEGREE: f64 = 0.10;
pub const COMFORT_FREE_REDUCTION_PERCENT: f64 = 20.0;
pub const COMFORT_PENALTY_PER_PERCENT: f64 = 0.01;
pub const MIN_COMFORT: f64 = 0.1;
pub const MAX_COMFORT: f64 = 1.0;

/// Estimate monthly impact of `params` against `baseline_energy`.
///
/// Pure and deterministic. Inputs are assumed validated.
pub fn simulate(baseline_energy: f64, params: &SimulationParams) -> SimulationResult {
    let temp_savings = (params.ac_temp - REFERENCE_SETPOINT_C).max(0.0) * SAVINGS_PER_DEGREE;
    let load_savings = params.reduction_percent / 100.0;
    let savings_fraction = temp_savings + load_savings;

    let energy_saved = (baseline_energy * BILLING_DAYS * savings_fraction).round();
    let incentive = if params.incentive_enabled {
        DISCOM_INCENTIVE
    } else {
        0.0
    };
    let cost_savings = (energy_saved * TARIFF_PER_KWH + incentive).round();
    let carbon_reduction = (energy_saved * CARBON_KG_PER_KWH).round();

    SimulationResult {
        cost_savings,
        carbon_reduction,
        comfort_score: comfort_score(params),
        energy_saved,
        outdoor_temp: None,
    }
}

/// Occupant comfort proxy, always within `[MIN_COMFORT, MAX_COMFORT]`.
pub fn comfort_score(params: &SimulationParams) -> f64 {
    let mut score = MAX_COMFORT;
    if params.ac_temp > COMFORT_SETPOINT_C {
        score -= (params.ac_temp - COMFORT_SETPOINT_C) * COMFORT_PENALTY_PER_DEGREE;
    }
    if params.reduction_percent > COMFORT_FREE_REDUCTION_PERCENT {
        score -= (params.reduction_percent - COMFORT_FREE_REDUCTION_PERCENT) * COMFORT_PENALTY_PER_PERCENT;
    }
    score.clamp(MIN_COMFORT, MAX_COMFORT)
}

/// Runs [`simulate`] against the baseline from storage.
pub struct LocalHeuristicEvaluator {
    baseline: BaselineEstimator,
}

impl LocalHeuristicEvaluator {
    pub fn new(baseline: BaselineEstimator) -> Self {
        Self { baseline }
    }
}

#[async_trait]
impl PolicyEvaluator for LocalHeuristicEvaluator {
    async fn evaluate(&self, params: &SimulationParams) -> Result<SimulationResult, SimulationError> {
        let baseline_kwh = self.baseline.estimate().await?;
        let result = simulate(baseline_kwh, params);
        debug!(
            baseline_kwh,
            ac_temp = params.ac_temp,
            reduction_percent = params.reduction_percent,
            energy_saved = result.energy_saved,
            "local heuristic evaluated"
        );
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "local-heuristic"
    }
}
