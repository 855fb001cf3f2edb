//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for members and goals.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::Mood;

/// Demo team inserted into an empty database, paired with moods in ordinal order.
const DEMO_TEAM: [&str; 5] = ["Alex", "Jordan", "Morgan", "Riley", "Taylor"];

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(sqlx::Error::Io)?;
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS team_members (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            mood INTEGER NOT NULL DEFAULT 2 CHECK (mood BETWEEN 0 AND 4),
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS goals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            team_member_id INTEGER NOT NULL
                REFERENCES team_members(id) ON DELETE CASCADE,
            description TEXT NOT NULL,
            is_completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for the ordered listings
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_team_members_name ON team_members(name);
        CREATE INDEX IF NOT EXISTS idx_goals_created_at ON goals(created_at, id);
        CREATE INDEX IF NOT EXISTS idx_goals_member ON goals(team_member_id, created_at, id);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert the demo team if the database has no members yet.
///
/// Returns the number of members inserted.
pub async fn seed_demo_team(repo: &Repository) -> Result<usize, AppError> {
    if repo.count_members().await? > 0 {
        return Ok(0);
    }

    for (name, mood) in DEMO_TEAM.into_iter().zip(Mood::ALL) {
        repo.create_member(name, mood).await?;
    }

    tracing::info!("Seeded {} demo team members", DEMO_TEAM.len());
    Ok(DEMO_TEAM.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_seed_only_fills_empty_database() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("seed.sqlite"))
            .await
            .unwrap();
        let repo = Repository::new(pool);

        assert_eq!(seed_demo_team(&repo).await.unwrap(), 5);
        assert_eq!(seed_demo_team(&repo).await.unwrap(), 0);
        assert_eq!(repo.count_members().await.unwrap(), 5);

        let moods: Vec<Mood> = {
            let mut moods: Vec<Mood> = repo
                .list_members()
                .await
                .unwrap()
                .into_iter()
                .map(|m| m.mood)
                .collect();
            moods.sort();
            moods
        };
        assert_eq!(moods, Mood::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("twice.sqlite");

        let pool = init_database(&db_path).await.unwrap();
        pool.close().await;
        let pool = init_database(&db_path).await.unwrap();

        let repo = Repository::new(pool);
        assert_eq!(repo.count_members().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unusable_data_directory_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let result = init_database(&blocker.join("goals.sqlite")).await;

        assert!(matches!(result, Err(sqlx::Error::Io(_))));
    }
}
