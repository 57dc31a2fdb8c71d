//! Repository Pattern Abstractions
//!
//! Traits separating team-management logic from the storage layer. The
//! production implementations live in `infrastructure::persistence` (SQLite);
//! `infrastructure::repositories::in_memory` provides in-memory variants for
//! tests and single-instance use.

use crate::domain::huddle::Announcement;
use crate::domain::roster::Player;
use crate::domain::schedule::{Rsvp, RsvpStatus, TeamEvent};
use crate::domain::stats::PlayerSeasonStats;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository for persisted season stat lines.
#[async_trait]
pub trait SeasonStatsRepository: Send + Sync {
    /// Apply a batch of session delta rows in one shot, merging additively
    /// into existing totals keyed by `(player_id, team_id, season)`.
    ///
    /// The batch must be all-or-nothing: either every row lands or the
    /// season table is untouched.
    async fn upsert_batch(&self, rows: &[PlayerSeasonStats]) -> Result<()>;

    /// All accumulated stat lines for one team and season.
    async fn season_totals(&self, team_id: &str, season: &str) -> Result<Vec<PlayerSeasonStats>>;
}

/// Repository for the team roster.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    async fn add(&self, player: &Player) -> Result<()>;

    async fn list(&self, team_id: &str) -> Result<Vec<Player>>;

    async fn find(&self, player_id: &str) -> Result<Option<Player>>;

    async fn remove(&self, player_id: &str) -> Result<()>;
}

/// Repository for scheduled games and practices.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn add(&self, event: &TeamEvent) -> Result<()>;

    async fn find(&self, event_id: &str) -> Result<Option<TeamEvent>>;

    /// Events starting at or after `from`, soonest first.
    async fn upcoming(&self, team_id: &str, from: DateTime<Utc>) -> Result<Vec<TeamEvent>>;
}

/// Repository for event RSVPs. One reply per (event, player); replying again
/// overwrites.
#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn set(&self, event_id: &str, player_id: &str, status: RsvpStatus) -> Result<()>;

    async fn for_event(&self, event_id: &str) -> Result<Vec<Rsvp>>;
}

/// Repository for huddle announcements.
#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn post(&self, announcement: &Announcement) -> Result<()>;

    /// Most recent announcements, pinned first, then newest first.
    async fn latest(&self, team_id: &str, limit: usize) -> Result<Vec<Announcement>>;
}
