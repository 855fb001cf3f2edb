//! Goal tracker use cases.
//!
//! Each operation re-reads storage; nothing is cached between calls. A
//! missing member or goal is reported as `None` (or `false` for deletes) so
//! the not-found path is checked at every call site. Storage failures are
//! the only `Err`.

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{DashboardResponse, GoalView, Mood, TeamMemberView};
use crate::stats;

/// Orchestrates repository calls and the dashboard aggregation.
#[derive(Clone)]
pub struct GoalTrackerService {
    repo: Repository,
}

impl GoalTrackerService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// All members with their goals, plus team statistics.
    pub async fn get_dashboard(&self) -> Result<DashboardResponse, AppError> {
        let members = self.repo.list_members().await?;
        let goals = self.repo.list_goals().await?;

        let members = stats::build_member_views(&members, &goals);
        let stats = stats::compute_dashboard_stats(&members, &goals);

        Ok(DashboardResponse { members, stats })
    }

    /// All members ordered by name, without goals.
    pub async fn get_members(&self) -> Result<Vec<TeamMemberView>, AppError> {
        let members = self.repo.list_members().await?;
        Ok(members.iter().map(TeamMemberView::without_goals).collect())
    }

    pub async fn get_goal(&self, id: i64) -> Result<Option<GoalView>, AppError> {
        Ok(self.repo.get_goal(id).await?.map(GoalView::from))
    }

    /// Create a goal for an existing member.
    ///
    /// The description is stored as given; callers validate it first.
    pub async fn create_goal(
        &self,
        team_member_id: i64,
        description: &str,
    ) -> Result<Option<GoalView>, AppError> {
        if self.repo.get_member(team_member_id).await?.is_none() {
            tracing::debug!("Goal creation for unknown member {}", team_member_id);
            return Ok(None);
        }

        let goal = self.repo.create_goal(team_member_id, description).await?;
        tracing::info!(
            "Created goal {} for member {} at {}",
            goal.id,
            team_member_id,
            goal.created_at
        );
        Ok(Some(goal.into()))
    }

    /// Flip a goal between open and completed.
    pub async fn toggle_goal(&self, id: i64) -> Result<Option<GoalView>, AppError> {
        let goal = self.repo.toggle_goal_completed(id).await?;
        if let Some(goal) = &goal {
            tracing::info!("Goal {} completed = {}", goal.id, goal.is_completed);
        }
        Ok(goal.map(GoalView::from))
    }

    /// Delete a goal. Returns `false` if it did not exist.
    pub async fn delete_goal(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.repo.delete_goal(id).await?;
        if deleted {
            tracing::info!("Deleted goal {}", id);
        }
        Ok(deleted)
    }

    /// Set a member's mood and return the member with its current goals.
    pub async fn update_mood(
        &self,
        member_id: i64,
        mood: Mood,
    ) -> Result<Option<TeamMemberView>, AppError> {
        let Some(member) = self.repo.set_member_mood(member_id, mood).await? else {
            return Ok(None);
        };
        tracing::info!("Member {} mood set to {}", member.id, mood);

        let goals = self.repo.list_goals_for_member(member.id).await?;
        let goals = goals.into_iter().map(GoalView::from).collect();
        Ok(Some(TeamMemberView::new(&member, goals)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use crate::models::MoodCount;
    use tempfile::TempDir;

    async fn test_service() -> (GoalTrackerService, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("test.sqlite"))
            .await
            .expect("Failed to init DB");
        (GoalTrackerService::new(Repository::new(pool)), temp_dir)
    }

    #[tokio::test]
    async fn test_dashboard_scenario() {
        let (service, _dir) = test_service().await;
        let ann = service.repo().create_member("Ann", Mood::Happy).await.unwrap();
        let bo = service.repo().create_member("Bo", Mood::Sad).await.unwrap();

        let g1 = service.create_goal(ann.id, "one").await.unwrap().unwrap();
        service.create_goal(ann.id, "two").await.unwrap().unwrap();
        let g3 = service.create_goal(bo.id, "three").await.unwrap().unwrap();
        service.toggle_goal(g1.id).await.unwrap().unwrap();
        service.toggle_goal(g3.id).await.unwrap().unwrap();

        let dashboard = service.get_dashboard().await.unwrap();

        assert_eq!(dashboard.stats.total_goals, 3);
        assert_eq!(dashboard.stats.completed_goals, 2);
        assert_eq!(dashboard.stats.completion_percentage, 67);
        assert_eq!(
            dashboard.stats.mood_distribution,
            vec![
                MoodCount {
                    mood: Mood::Happy,
                    count: 1
                },
                MoodCount {
                    mood: Mood::Sad,
                    count: 1
                },
            ]
        );
        assert_eq!(dashboard.stats.dominant_mood, Some(Mood::Happy));

        assert_eq!(dashboard.members.len(), 2);
        assert_eq!(dashboard.members[0].name, "Ann");
        let descriptions: Vec<&str> = dashboard.members[0]
            .goals
            .iter()
            .map(|g| g.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["one", "two"]);
        assert_eq!(dashboard.members[1].goals.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_dashboard() {
        let (service, _dir) = test_service().await;
        let dashboard = service.get_dashboard().await.unwrap();

        assert!(dashboard.members.is_empty());
        assert_eq!(dashboard.stats.completion_percentage, 0);
        assert_eq!(dashboard.stats.dominant_mood, None);
    }

    #[tokio::test]
    async fn test_members_listing_omits_goals() {
        let (service, _dir) = test_service().await;
        let ann = service.repo().create_member("Ann", Mood::Happy).await.unwrap();
        service.create_goal(ann.id, "hidden").await.unwrap();

        let members = service.get_members().await.unwrap();
        assert_eq!(members.len(), 1);
        assert!(members[0].goals.is_empty());
    }

    #[tokio::test]
    async fn test_create_goal_for_unknown_member() {
        let (service, _dir) = test_service().await;
        assert!(service.create_goal(999, "desc").await.unwrap().is_none());
        assert!(service.repo().list_goals().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_flips_each_call() {
        let (service, _dir) = test_service().await;
        let ann = service.repo().create_member("Ann", Mood::Happy).await.unwrap();
        let goal = service.create_goal(ann.id, "flip").await.unwrap().unwrap();
        assert!(!goal.is_completed);

        assert!(service.toggle_goal(goal.id).await.unwrap().unwrap().is_completed);
        assert!(!service.toggle_goal(goal.id).await.unwrap().unwrap().is_completed);
        assert!(service.toggle_goal(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_goal() {
        let (service, _dir) = test_service().await;
        let ann = service.repo().create_member("Ann", Mood::Happy).await.unwrap();
        let goal = service.create_goal(ann.id, "gone").await.unwrap().unwrap();

        assert!(!service.delete_goal(goal.id + 100).await.unwrap());
        assert!(service.delete_goal(goal.id).await.unwrap());
        assert!(service.get_goal(goal.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_mood_returns_current_goals() {
        let (service, _dir) = test_service().await;
        let ann = service.repo().create_member("Ann", Mood::Happy).await.unwrap();
        let bo = service.repo().create_member("Bo", Mood::Sad).await.unwrap();
        service.create_goal(ann.id, "first").await.unwrap();
        service.create_goal(bo.id, "not ann's").await.unwrap();
        service.create_goal(ann.id, "second").await.unwrap();

        let view = service
            .update_mood(ann.id, Mood::Stressed)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(view.mood, Mood::Stressed);
        let descriptions: Vec<&str> = view.goals.iter().map(|g| g.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second"]);

        assert!(service
            .update_mood(999, Mood::Happy)
            .await
            .unwrap()
            .is_none());
    }
}
