use crate::domain::leaderboard::{self, LeaderboardCategory, LeaderboardEntry};
use crate::domain::repositories::{RosterRepository, SeasonStatsRepository};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Produces ranked season standings by joining persisted stat lines with
/// roster names.
pub struct LeaderboardService {
    stats: Arc<dyn SeasonStatsRepository>,
    roster: Arc<dyn RosterRepository>,
}

impl LeaderboardService {
    pub fn new(stats: Arc<dyn SeasonStatsRepository>, roster: Arc<dyn RosterRepository>) -> Self {
        Self { stats, roster }
    }

    pub async fn standings(
        &self,
        team_id: &str,
        season: &str,
        category: LeaderboardCategory,
    ) -> Result<Vec<LeaderboardEntry>> {
        let lines = self.stats.season_totals(team_id, season).await?;
        let names: HashMap<String, String> = self
            .roster
            .list(team_id)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        let board = leaderboard::rank(category, &lines, |id| names.get(id).cloned());
        info!(
            "Leaderboard: {} entries for team {} ({}, {})",
            board.len(),
            team_id,
            season,
            category
        );
        Ok(board)
    }
}
