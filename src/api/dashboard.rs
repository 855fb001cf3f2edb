//! Dashboard API endpoint.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::DashboardResponse;
use crate::AppState;

/// GET /api/dashboard - Members with goals plus team statistics.
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let dashboard = state.service.get_dashboard().await?;
    Ok(Json(dashboard))
}
