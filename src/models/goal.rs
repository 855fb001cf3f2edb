//! Goal records and the goal view model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted goal description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// A goal as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: i64,
    pub team_member_id: i64,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Goal shape on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalView {
    pub id: i64,
    pub team_member_id: i64,
    pub description: String,
    pub is_completed: bool,
}

impl From<&Goal> for GoalView {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id,
            team_member_id: goal.team_member_id,
            description: goal.description.clone(),
            is_completed: goal.is_completed,
        }
    }
}

impl From<Goal> for GoalView {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id,
            team_member_id: goal.team_member_id,
            description: goal.description,
            is_completed: goal.is_completed,
        }
    }
}

/// Request body for creating a goal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub team_member_id: i64,
    #[serde(default)]
    pub description: String,
}
