use crate::domain::huddle::Announcement;
use crate::domain::repositories::AnnouncementRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sqlx::{Row, SqlitePool};

pub struct SqliteAnnouncementRepository {
    pool: SqlitePool,
}

impl SqliteAnnouncementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementRepository for SqliteAnnouncementRepository {
    async fn post(&self, announcement: &Announcement) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO announcements (id, team_id, author, title, body, pinned, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&announcement.id)
        .bind(&announcement.team_id)
        .bind(&announcement.author)
        .bind(&announcement.title)
        .bind(&announcement.body)
        .bind(announcement.pinned)
        .bind(announcement.created_at.timestamp())
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to post announcement '{}'", announcement.title))?;

        Ok(())
    }

    async fn latest(&self, team_id: &str, limit: usize) -> Result<Vec<Announcement>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM announcements
            WHERE team_id = ?
            ORDER BY pinned DESC, created_at DESC
            LIMIT ?
            "#,
        )
        .bind(team_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load announcements")?;

        rows.iter()
            .map(|row| {
                let created_secs: i64 = row.try_get("created_at")?;
                Ok(Announcement {
                    id: row.try_get("id")?,
                    team_id: row.try_get("team_id")?,
                    author: row.try_get("author")?,
                    title: row.try_get("title")?,
                    body: row.try_get("body")?,
                    pinned: row.try_get("pinned")?,
                    created_at: Utc
                        .timestamp_opt(created_secs, 0)
                        .single()
                        .context("Invalid announcement timestamp in database")?,
                })
            })
            .collect()
    }
}
