//! Dashboard response models matching the frontend `DashboardResponse`.

use serde::{Deserialize, Serialize};

use super::{Mood, TeamMemberView};

/// Number of members currently in one mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: usize,
}

/// Aggregate goal and mood statistics for the whole team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_goals: usize,
    pub completed_goals: usize,
    pub completion_percentage: u32,
    pub mood_distribution: Vec<MoodCount>,
    pub dominant_mood: Option<Mood>,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub members: Vec<TeamMemberView>,
    pub stats: DashboardStats,
}
