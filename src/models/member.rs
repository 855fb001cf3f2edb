//! Team member records and the member view model sent to the frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GoalView, Mood};

/// A team member as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub mood: Mood,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

/// A team member with the goals the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberView {
    pub id: i64,
    pub name: String,
    pub mood: Mood,
    pub goals: Vec<GoalView>,
}

impl TeamMemberView {
    pub fn new(member: &TeamMember, goals: Vec<GoalView>) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            mood: member.mood,
            goals,
        }
    }

    /// View used by the member listing, which never carries goals.
    pub fn without_goals(member: &TeamMember) -> Self {
        Self::new(member, Vec::new())
    }
}

/// Request body for changing a member's mood.
///
/// The mood stays a raw integer here so an undefined ordinal is reported as
/// a validation error rather than a body rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMoodRequest {
    pub mood: i64,
}
