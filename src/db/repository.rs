//! Database repository for member and goal operations.
//!
//! Every write is a single statement, so each call is atomic on its own and
//! holds a pooled connection only for that statement.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Goal, Mood, TeamMember};

const MEMBER_COLUMNS: &str = "id, name, mood, created_at";
const GOAL_COLUMNS: &str = "id, team_member_id, description, is_completed, created_at";

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== MEMBER OPERATIONS ====================

    /// List all members ordered by name.
    pub async fn list_members(&self) -> Result<Vec<TeamMember>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members ORDER BY name, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(member_from_row).collect()
    }

    /// Get a member by ID.
    pub async fn get_member(&self, id: i64) -> Result<Option<TeamMember>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(member_from_row).transpose()
    }

    /// Set a member's mood, returning the updated member if it exists.
    pub async fn set_member_mood(
        &self,
        id: i64,
        mood: Mood,
    ) -> Result<Option<TeamMember>, AppError> {
        let row = sqlx::query(&format!(
            "UPDATE team_members SET mood = ? WHERE id = ? RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(mood.ordinal())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(member_from_row).transpose()
    }

    /// Insert a member. Only seeding and tests create members.
    pub async fn create_member(&self, name: &str, mood: Mood) -> Result<TeamMember, AppError> {
        let row = sqlx::query(&format!(
            "INSERT INTO team_members (name, mood, created_at) VALUES (?, ?, ?) RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(name)
        .bind(mood.ordinal())
        .bind(timestamp_now())
        .fetch_one(&self.pool)
        .await?;

        member_from_row(&row)
    }

    /// Count all members.
    pub async fn count_members(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM team_members")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    // ==================== GOAL OPERATIONS ====================

    /// List all goals in creation order.
    pub async fn list_goals(&self) -> Result<Vec<Goal>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {GOAL_COLUMNS} FROM goals ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(goal_from_row).collect()
    }

    /// List one member's goals in creation order.
    pub async fn list_goals_for_member(&self, member_id: i64) -> Result<Vec<Goal>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {GOAL_COLUMNS} FROM goals WHERE team_member_id = ? ORDER BY created_at, id"
        ))
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(goal_from_row).collect()
    }

    /// Get a goal by ID.
    pub async fn get_goal(&self, id: i64) -> Result<Option<Goal>, AppError> {
        let row = sqlx::query(&format!("SELECT {GOAL_COLUMNS} FROM goals WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(goal_from_row).transpose()
    }

    /// Create an open goal for a member.
    ///
    /// The member must exist; a dangling reference fails the foreign key.
    pub async fn create_goal(&self, member_id: i64, description: &str) -> Result<Goal, AppError> {
        let row = sqlx::query(&format!(
            "INSERT INTO goals (team_member_id, description, is_completed, created_at) VALUES (?, ?, 0, ?) RETURNING {GOAL_COLUMNS}"
        ))
        .bind(member_id)
        .bind(description)
        .bind(timestamp_now())
        .fetch_one(&self.pool)
        .await?;

        goal_from_row(&row)
    }

    /// Flip a goal's completion flag, returning the updated goal if it exists.
    pub async fn toggle_goal_completed(&self, id: i64) -> Result<Option<Goal>, AppError> {
        let row = sqlx::query(&format!(
            "UPDATE goals SET is_completed = NOT is_completed WHERE id = ? RETURNING {GOAL_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(goal_from_row).transpose()
    }

    /// Delete a goal. Returns `false` when no row matched.
    pub async fn delete_goal(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Helper functions for row conversion

/// Fixed-width UTC timestamps so text ordering matches time ordering.
fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn member_from_row(row: &SqliteRow) -> Result<TeamMember, AppError> {
    let mood: i64 = row.try_get("mood")?;
    let mood = Mood::try_from(mood)
        .map_err(|e| AppError::Internal(format!("Stored member has {}", e)))?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(TeamMember {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        mood,
        created_at,
    })
}

fn goal_from_row(row: &SqliteRow) -> Result<Goal, AppError> {
    Ok(Goal {
        id: row.try_get("id")?,
        team_member_id: row.try_get("team_member_id")?,
        description: row.try_get("description")?,
        is_completed: row.try_get("is_completed")?,
        created_at: row.try_get("created_at")?,
    })
}
