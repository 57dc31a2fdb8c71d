use crate::domain::repositories::RosterRepository;
use crate::domain::roster::{Player, Position};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::str::FromStr;

pub struct SqliteRosterRepository {
    pool: SqlitePool,
}

impl SqliteRosterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_player(row: &sqlx::sqlite::SqliteRow) -> Result<Player> {
    let position_str: String = row.try_get("position")?;
    Ok(Player {
        id: row.try_get("id")?,
        team_id: row.try_get("team_id")?,
        name: row.try_get("name")?,
        jersey_number: row.try_get("jersey_number")?,
        position: Position::from_str(&position_str)?,
    })
}

#[async_trait]
impl RosterRepository for SqliteRosterRepository {
    async fn add(&self, player: &Player) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO players (id, team_id, name, jersey_number, position)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&player.id)
        .bind(&player.team_id)
        .bind(&player.name)
        .bind(player.jersey_number)
        .bind(player.position.to_string())
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to add player {}", player.name))?;

        Ok(())
    }

    async fn list(&self, team_id: &str) -> Result<Vec<Player>> {
        let rows = sqlx::query("SELECT * FROM players WHERE team_id = ? ORDER BY jersey_number")
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list roster")?;

        rows.iter().map(row_to_player).collect()
    }

    async fn find(&self, player_id: &str) -> Result<Option<Player>> {
        let row = sqlx::query("SELECT * FROM players WHERE id = ?")
            .bind(player_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_player).transpose()
    }

    async fn remove(&self, player_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(player_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to remove player {player_id}"))?;
        Ok(())
    }
}
