use anyhow::{Context, Result};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tokio::fs;
use tracing::info;

/// Singleton database wrapper
#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn new(db_url: &str) -> Result<Self> {
        // Ensure the directory exists if it's a file path
        if let Some(path_part) = db_url.strip_prefix("sqlite://") {
            let path = Path::new(path_part);
            if let Some(parent) = path.parent()
                && !parent.exists()
            {
                fs::create_dir_all(parent)
                    .await
                    .context("Failed to create database directory")?;
            }
        }

        let options = SqliteConnectOptions::from_str(db_url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal); // Better for concurrency

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("Failed to connect to SQLite database")?;

        info!("Connected to database: {}", db_url);

        let db = Self { pool };
        db.init().await?;

        Ok(db)
    }

    /// Private in-memory database for tests. Capped at one connection:
    /// every `sqlite::memory:` connection is its own database, so a larger
    /// pool would scatter tables across connections.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        let db = Self { pool };
        db.init().await?;
        Ok(db)
    }

    /// Initialize database schema
    async fn init(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id TEXT PRIMARY KEY,
                team_id TEXT NOT NULL,
                name TEXT NOT NULL,
                jersey_number INTEGER NOT NULL,
                position TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_players_team
            ON players (team_id);
            "#,
        )
        .execute(&mut *conn)
        .await
        .context("Failed to create players table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS team_events (
                id TEXT PRIMARY KEY,
                team_id TEXT NOT NULL,
                kind TEXT NOT NULL,
                opponent TEXT,
                start_time INTEGER NOT NULL,
                location TEXT NOT NULL,
                notes TEXT
            );
            CREATE INDEX IF NOT EXISTS idx_events_team_time
            ON team_events (team_id, start_time);
            "#,
        )
        .execute(&mut *conn)
        .await
        .context("Failed to create team_events table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS rsvps (
                event_id TEXT NOT NULL,
                player_id TEXT NOT NULL,
                status TEXT NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (event_id, player_id)
            );
            "#,
        )
        .execute(&mut *conn)
        .await
        .context("Failed to create rsvps table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS announcements (
                id TEXT PRIMARY KEY,
                team_id TEXT NOT NULL,
                author TEXT NOT NULL,
                title TEXT NOT NULL,
                body TEXT NOT NULL,
                pinned BOOLEAN NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_announcements_team_time
            ON announcements (team_id, pinned, created_at);
            "#,
        )
        .execute(&mut *conn)
        .await
        .context("Failed to create announcements table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS player_season_stats (
                player_id TEXT NOT NULL,
                team_id TEXT NOT NULL,
                season TEXT NOT NULL,
                qb_completions INTEGER NOT NULL DEFAULT 0,
                qb_touchdowns INTEGER NOT NULL DEFAULT 0,
                qb_td_points INTEGER NOT NULL DEFAULT 0,
                runs INTEGER NOT NULL DEFAULT 0,
                receptions INTEGER NOT NULL DEFAULT 0,
                player_td_points INTEGER NOT NULL DEFAULT 0,
                extra_point_1 INTEGER NOT NULL DEFAULT 0,
                extra_point_2 INTEGER NOT NULL DEFAULT 0,
                def_interceptions INTEGER NOT NULL DEFAULT 0,
                pick_six INTEGER NOT NULL DEFAULT 0,
                flag_pulls INTEGER NOT NULL DEFAULT 0,
                safeties INTEGER NOT NULL DEFAULT 0,
                sacks INTEGER NOT NULL DEFAULT 0,
                fumbles INTEGER NOT NULL DEFAULT 0,
                interceptions_thrown INTEGER NOT NULL DEFAULT 0,
                total_points INTEGER NOT NULL DEFAULT 0,
                games_played INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (player_id, team_id, season)
            );
            "#,
        )
        .execute(&mut *conn)
        .await
        .context("Failed to create player_season_stats table")?;

        info!("Database schema initialized.");
        Ok(())
    }
}
