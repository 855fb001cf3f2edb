//! Goal API endpoints.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use super::{validate_description, ApiJson, ApiPath};
use crate::errors::AppError;
use crate::models::{CreateGoalRequest, GoalView};
use crate::AppState;

fn goal_not_found() -> AppError {
    AppError::NotFound("Goal not found".to_string())
}

/// GET /api/goals/:id - Get a single goal.
pub async fn get_goal(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<GoalView>, AppError> {
    state
        .service
        .get_goal(id)
        .await?
        .map(Json)
        .ok_or_else(goal_not_found)
}

/// POST /api/goals - Create a goal for a member.
pub async fn create_goal(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateGoalRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_description(&request.description)?;

    let goal = state
        .service
        .create_goal(request.team_member_id, &request.description)
        .await?
        .ok_or_else(|| AppError::NotFound("Team member not found".to_string()))?;

    let location = format!("/api/goals/{}", goal.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(goal)))
}

/// PATCH /api/goals/:id/toggle - Flip a goal's completion flag.
pub async fn toggle_goal(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<GoalView>, AppError> {
    state
        .service
        .toggle_goal(id)
        .await?
        .map(Json)
        .ok_or_else(goal_not_found)
}

/// DELETE /api/goals/:id - Delete a goal.
pub async fn delete_goal(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    if state.service.delete_goal(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(goal_not_found())
    }
}
