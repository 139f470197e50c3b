use axum::Json;

use crate::domain::{recommendations, Recommendation};

/// GET /api/recommendations
pub async fn list_recommendations() -> Json<&'static [Recommendation]> {
    Json(recommendations())
}
