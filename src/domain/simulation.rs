use serde::{Deserialize, Serialize};
use validator::Validate;

/// HVAC policy under evaluation, as submitted by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    /// AC setpoint in °C
    #[validate(range(min = 18.0, max = 30.0))]
    pub ac_temp: f64,
    /// Load shed as a percentage of baseline
    #[validate(range(min = 0.0, max = 100.0))]
    pub reduction_percent: f64,
    /// Whether the DISCOM demand-response rebate applies
    pub incentive_enabled: bool,
}

/// Estimated monthly impact of a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Currency amount
    pub cost_savings: f64,
    /// kg CO2
    pub carbon_reduction: f64,
    /// 0.1 ..= 1.0
    pub comfort_score: f64,
    /// kWh
    pub energy_saved: f64,
    /// Only reported by the remote service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outdoor_temp: Option<f64>,
}
