use crate::domain::repositories::RsvpRepository;
use crate::domain::schedule::{Rsvp, RsvpStatus};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;

pub struct SqliteRsvpRepository {
    pool: SqlitePool,
}

impl SqliteRsvpRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for SqliteRsvpRepository {
    async fn set(&self, event_id: &str, player_id: &str, status: RsvpStatus) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO rsvps (event_id, player_id, status, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(event_id, player_id) DO UPDATE SET
                status = excluded.status,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(event_id)
        .bind(player_id)
        .bind(status.to_string())
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to set RSVP for player {player_id}"))?;

        Ok(())
    }

    async fn for_event(&self, event_id: &str) -> Result<Vec<Rsvp>> {
        let rows = sqlx::query("SELECT * FROM rsvps WHERE event_id = ? ORDER BY player_id")
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .context("Failed to load RSVPs")?;

        rows.iter()
            .map(|row| {
                let status_str: String = row.try_get("status")?;
                let updated_secs: i64 = row.try_get("updated_at")?;
                Ok(Rsvp {
                    event_id: row.try_get("event_id")?,
                    player_id: row.try_get("player_id")?,
                    status: RsvpStatus::from_str(&status_str)?,
                    updated_at: Utc
                        .timestamp_opt(updated_secs, 0)
                        .single()
                        .context("Invalid RSVP timestamp in database")?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::Database;

    #[tokio::test]
    async fn test_replying_again_overwrites_the_previous_status() {
        let db = Database::in_memory().await.unwrap();
        let repo = SqliteRsvpRepository::new(db.pool.clone());

        repo.set("ev-1", "p1", RsvpStatus::Maybe).await.unwrap();
        repo.set("ev-1", "p1", RsvpStatus::Going).await.unwrap();
        repo.set("ev-1", "p2", RsvpStatus::NotGoing).await.unwrap();

        let replies = repo.for_event("ev-1").await.unwrap();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].player_id, "p1");
        assert_eq!(replies[0].status, RsvpStatus::Going);
        assert_eq!(replies[1].status, RsvpStatus::NotGoing);
    }

    #[tokio::test]
    async fn test_replies_are_scoped_to_the_event() {
        let db = Database::in_memory().await.unwrap();
        let repo = SqliteRsvpRepository::new(db.pool.clone());

        repo.set("ev-1", "p1", RsvpStatus::Going).await.unwrap();
        repo.set("ev-2", "p1", RsvpStatus::NotGoing).await.unwrap();

        let replies = repo.for_event("ev-1").await.unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].status, RsvpStatus::Going);
    }
}
