//! In-Memory Repository Implementations
//!
//! Thread-safe (`Arc<RwLock>`) implementations of the repository traits in
//! `domain::repositories`. Used by unit tests and suitable for single-process
//! runs where nothing needs to survive a restart. Production persistence is
//! the SQLite layer in `infrastructure::persistence`.

use crate::domain::repositories::{RosterRepository, SeasonStatsRepository};
use crate::domain::roster::Player;
use crate::domain::stats::PlayerSeasonStats;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Season key mirroring the SQL uniqueness constraint.
type SeasonKey = (String, String, String);

/// In-memory implementation of SeasonStatsRepository with the same additive
/// merge-on-conflict semantics as the SQLite version.
pub struct InMemorySeasonStatsRepository {
    lines: Arc<RwLock<HashMap<SeasonKey, PlayerSeasonStats>>>,
    upsert_calls: Arc<RwLock<usize>>,
}

impl InMemorySeasonStatsRepository {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(RwLock::new(HashMap::new())),
            upsert_calls: Arc::new(RwLock::new(0)),
        }
    }

    /// Number of `upsert_batch` invocations, for asserting that empty saves
    /// never touch storage.
    pub async fn upsert_calls(&self) -> usize {
        *self.upsert_calls.read().await
    }
}

impl Default for InMemorySeasonStatsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeasonStatsRepository for InMemorySeasonStatsRepository {
    async fn upsert_batch(&self, rows: &[PlayerSeasonStats]) -> Result<()> {
        *self.upsert_calls.write().await += 1;

        let mut lines = self.lines.write().await;
        for row in rows {
            let key = (
                row.player_id.clone(),
                row.team_id.clone(),
                row.season.clone(),
            );
            match lines.get_mut(&key) {
                Some(existing) => existing.merge(row),
                None => {
                    lines.insert(key, row.clone());
                }
            }
        }
        Ok(())
    }

    async fn season_totals(&self, team_id: &str, season: &str) -> Result<Vec<PlayerSeasonStats>> {
        let lines = self.lines.read().await;
        let mut totals: Vec<PlayerSeasonStats> = lines
            .values()
            .filter(|line| line.team_id == team_id && line.season == season)
            .cloned()
            .collect();
        totals.sort_by(|a, b| a.player_id.cmp(&b.player_id));
        Ok(totals)
    }
}

/// In-memory implementation of RosterRepository
pub struct InMemoryRosterRepository {
    players: Arc<RwLock<Vec<Player>>>,
}

impl InMemoryRosterRepository {
    pub fn new() -> Self {
        Self {
            players: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryRosterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    async fn add(&self, player: &Player) -> Result<()> {
        self.players.write().await.push(player.clone());
        Ok(())
    }

    async fn list(&self, team_id: &str) -> Result<Vec<Player>> {
        let players = self.players.read().await;
        let mut team: Vec<Player> = players
            .iter()
            .filter(|p| p.team_id == team_id)
            .cloned()
            .collect();
        team.sort_by_key(|p| p.jersey_number);
        Ok(team)
    }

    async fn find(&self, player_id: &str) -> Result<Option<Player>> {
        let players = self.players.read().await;
        Ok(players.iter().find(|p| p.id == player_id).cloned())
    }

    async fn remove(&self, player_id: &str) -> Result<()> {
        self.players.write().await.retain(|p| p.id != player_id);
        Ok(())
    }
}
