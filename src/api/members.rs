//! Member API endpoints.

use axum::{extract::State, Json};

use super::{parse_mood, ApiJson, ApiPath};
use crate::errors::AppError;
use crate::models::{TeamMemberView, UpdateMoodRequest};
use crate::AppState;

/// GET /api/members - List all members, without goals.
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamMemberView>>, AppError> {
    let members = state.service.get_members().await?;
    Ok(Json(members))
}

/// PATCH /api/members/:id/mood - Set a member's mood.
pub async fn update_mood(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateMoodRequest>,
) -> Result<Json<TeamMemberView>, AppError> {
    let mood = parse_mood(request.mood)?;

    match state.service.update_mood(id, mood).await? {
        Some(member) => Ok(Json(member)),
        None => Err(AppError::NotFound("Team member not found".to_string())),
    }
}
