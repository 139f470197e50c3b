use axum::{extract::State, Json};

use crate::{
    api::error::ApiError,
    dashboard::{daily_series, DailyPoint},
    state::AppState,
};

/// GET /api/dashboard - daily actual vs predicted energy and water
pub async fn get_dashboard(State(st): State<AppState>) -> Result<Json<Vec<DailyPoint>>, ApiError> {
    let readings = st.store.list().await?;
    let series = daily_series(&readings);
    tracing::debug!(readings = readings.len(), days = series.len(), "dashboard series built");
    Ok(Json(series))
}
