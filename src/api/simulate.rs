use axum::{
    extract::State,
    http::HeaderName,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{api::error::ApiError, domain::SimulationParams, state::AppState};

/// Which evaluator served the request: `remote`, `fallback` or `local`.
pub const SIMULATION_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-simulation-source");

/// POST /api/simulate - estimate the impact of an HVAC policy
pub async fn run_simulation(
    State(st): State<AppState>,
    Json(params): Json<SimulationParams>,
) -> Result<impl IntoResponse, ApiError> {
    params.validate()?;

    tracing::info!(
        ac_temp = params.ac_temp,
        reduction_percent = params.reduction_percent,
        incentive_enabled = params.incentive_enabled,
        "simulation requested"
    );

    let evaluation = st.evaluator.evaluate_with_source(&params).await?;

    Ok((
        [(SIMULATION_SOURCE_HEADER, evaluation.source.as_str())],
        Json(evaluation.result),
    ))
}
