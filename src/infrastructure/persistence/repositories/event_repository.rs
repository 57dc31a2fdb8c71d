use crate::domain::repositories::EventRepository;
use crate::domain::schedule::{EventKind, TeamEvent};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;

pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_event(row: &sqlx::sqlite::SqliteRow) -> Result<TeamEvent> {
    let kind_str: String = row.try_get("kind")?;
    let start_secs: i64 = row.try_get("start_time")?;
    let start_time = Utc
        .timestamp_opt(start_secs, 0)
        .single()
        .context("Invalid event start_time in database")?;

    Ok(TeamEvent {
        id: row.try_get("id")?,
        team_id: row.try_get("team_id")?,
        kind: EventKind::from_str(&kind_str)?,
        opponent: row.try_get("opponent")?,
        start_time,
        location: row.try_get("location")?,
        notes: row.try_get("notes")?,
    })
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn add(&self, event: &TeamEvent) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO team_events (id, team_id, kind, opponent, start_time, location, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.id)
        .bind(&event.team_id)
        .bind(event.kind.to_string())
        .bind(&event.opponent)
        .bind(event.start_time.timestamp())
        .bind(&event.location)
        .bind(&event.notes)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to add event {}", event.id))?;

        Ok(())
    }

    async fn find(&self, event_id: &str) -> Result<Option<TeamEvent>> {
        let row = sqlx::query("SELECT * FROM team_events WHERE id = ?")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_event).transpose()
    }

    async fn upcoming(&self, team_id: &str, from: DateTime<Utc>) -> Result<Vec<TeamEvent>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM team_events
            WHERE team_id = ? AND start_time >= ?
            ORDER BY start_time ASC
            "#,
        )
        .bind(team_id)
        .bind(from.timestamp())
        .fetch_all(&self.pool)
        .await
        .context("Failed to load upcoming events")?;

        rows.iter().map(row_to_event).collect()
    }
}
