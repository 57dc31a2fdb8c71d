use crate::domain::errors::StatsError;
use crate::domain::repositories::SeasonStatsRepository;
use crate::domain::stats::{PlayerSeasonStats, PlayerSessionStats, StatAction};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// What a successful save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No player had accumulated stats; storage was not touched.
    NothingToSave,
    /// Session totals for `players` players were merged into the season table.
    Saved { players: usize },
}

/// Accumulates per-player stat counters for the duration of one live game
/// and flushes the totals to the season table as a single batch.
///
/// The tracker is an explicit object owned by whoever runs the stat-entry
/// flow; all state lives here, nothing is ambient. Mutation goes through
/// `&mut self`, so a save exclusively borrows the tracker until it resolves
/// and no action can slip in between snapshot and flush.
pub struct GameSessionTracker {
    stats: HashMap<String, PlayerSessionStats>,
    repository: Arc<dyn SeasonStatsRepository>,
}

impl GameSessionTracker {
    pub fn new(repository: Arc<dyn SeasonStatsRepository>) -> Self {
        Self {
            stats: HashMap::new(),
            repository,
        }
    }

    /// Counters for a player, created all-zero on first reference.
    pub fn player_stats(&mut self, player_id: &str) -> &PlayerSessionStats {
        self.stats.entry(player_id.to_string()).or_default()
    }

    /// Apply one action to a player's counters. In-memory only; nothing is
    /// written to storage until `save`.
    pub fn record_action(
        &mut self,
        player_id: &str,
        action: StatAction,
        explicit_points: Option<u32>,
    ) {
        let entry = self.stats.entry(player_id.to_string()).or_default();
        let points = entry.record(action, explicit_points);
        info!(
            "GameSession: {} {} (+{} pts, total {})",
            player_id, action, points, entry.total_points
        );
    }

    /// String-boundary entry point for raw scorekeeper input. An unrecognized
    /// tag is logged and ignored, never fatal.
    pub fn record_tagged(&mut self, player_id: &str, tag: &str, explicit_points: Option<u32>) {
        match tag.parse::<StatAction>() {
            Ok(action) => self.record_action(player_id, action, explicit_points),
            Err(err) => warn!("GameSession: ignoring action for {}: {}", player_id, err),
        }
    }

    /// The full current mapping. Read-only; callers that need to keep data
    /// across a reset must clone.
    pub fn stats(&self) -> &HashMap<String, PlayerSessionStats> {
        &self.stats
    }

    /// Discard the session without saving.
    pub fn reset(&mut self) {
        self.stats.clear();
    }

    /// Flush every player's non-empty counters to the season table as one
    /// batch upsert keyed by `(player, team, season)`, with games-played
    /// advanced by one per player.
    ///
    /// On success the in-memory session is cleared. On failure it is left
    /// exactly as it was, so the caller can surface the error and retry.
    pub async fn save(&mut self, team_id: &str, season: &str) -> Result<SaveOutcome, StatsError> {
        let rows: Vec<PlayerSeasonStats> = self
            .stats
            .iter()
            .filter(|(_, stats)| !stats.is_empty())
            .map(|(player_id, stats)| {
                PlayerSeasonStats::session_delta(player_id, team_id, season, stats)
            })
            .collect();

        if rows.is_empty() {
            info!("GameSession: no stats to save for team {}", team_id);
            return Ok(SaveOutcome::NothingToSave);
        }

        let players = rows.len();
        self.repository
            .upsert_batch(&rows)
            .await
            .map_err(|e| StatsError::SaveFailed {
                team_id: team_id.to_string(),
                season: season.to_string(),
                reason: format!("{e:#}"),
            })?;

        info!(
            "GameSession: saved stats for {} players (team {}, season {})",
            players, team_id, season
        );
        self.stats.clear();
        Ok(SaveOutcome::Saved { players })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemorySeasonStatsRepository;
    use anyhow::Result;
    use async_trait::async_trait;

    /// Repository that always rejects the batch, for failure-path tests.
    struct FailingSeasonStatsRepository;

    #[async_trait]
    impl SeasonStatsRepository for FailingSeasonStatsRepository {
        async fn upsert_batch(&self, _rows: &[PlayerSeasonStats]) -> Result<()> {
            anyhow::bail!("storage unavailable")
        }

        async fn season_totals(
            &self,
            _team_id: &str,
            _season: &str,
        ) -> Result<Vec<PlayerSeasonStats>> {
            anyhow::bail!("storage unavailable")
        }
    }

    fn tracker_with_memory_repo() -> (GameSessionTracker, Arc<InMemorySeasonStatsRepository>) {
        let repo = Arc::new(InMemorySeasonStatsRepository::new());
        (GameSessionTracker::new(repo.clone()), repo)
    }

    #[test]
    fn test_player_stats_is_idempotent_for_new_players() {
        let (mut tracker, _) = tracker_with_memory_repo();

        let first = tracker.player_stats("p1").clone();
        let second = tracker.player_stats("p1").clone();

        assert!(first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_tag_is_ignored() {
        let (mut tracker, _) = tracker_with_memory_repo();

        tracker.record_tagged("p1", "triple_backflip", Some(6));

        // The bad tag must not create state either
        assert!(tracker.stats().is_empty());
    }

    #[test]
    fn test_tagged_and_typed_recording_agree() {
        let (mut tracker, _) = tracker_with_memory_repo();

        tracker.record_tagged("p1", "td_pass", None);
        tracker.record_action("p2", StatAction::TdPass, None);

        assert_eq!(tracker.stats()["p1"], tracker.stats()["p2"]);
        assert_eq!(tracker.stats()["p1"].total_points, 6);
    }

    #[test]
    fn test_total_points_is_order_independent() {
        let (mut forward, _) = tracker_with_memory_repo();
        let (mut backward, _) = tracker_with_memory_repo();

        let actions = [
            (StatAction::Touchdown, None),
            (StatAction::ExtraPoint2, None),
            (StatAction::Interception, Some(6)),
            (StatAction::Completion, None),
            (StatAction::Safety, None),
        ];

        for (action, points) in actions {
            forward.record_action("p1", action, points);
        }
        for (action, points) in actions.into_iter().rev() {
            backward.record_action("p1", action, points);
        }

        assert_eq!(forward.stats()["p1"], backward.stats()["p1"]);
        assert_eq!(forward.stats()["p1"].total_points, 16);
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut tracker, _) = tracker_with_memory_repo();

        tracker.record_action("p1", StatAction::Touchdown, None);
        tracker.record_action("p2", StatAction::FlagPull, None);
        tracker.reset();

        assert!(tracker.stats().is_empty());
    }

    #[tokio::test]
    async fn test_empty_save_is_a_no_op_that_skips_storage() {
        let (mut tracker, repo) = tracker_with_memory_repo();

        let outcome = tracker.save("t1", "2025-fall").await.unwrap();

        assert_eq!(outcome, SaveOutcome::NothingToSave);
        assert_eq!(repo.upsert_calls().await, 0);
    }

    #[tokio::test]
    async fn test_save_skips_players_with_no_recorded_actions() {
        let (mut tracker, repo) = tracker_with_memory_repo();

        tracker.player_stats("benched");
        tracker.record_action("p1", StatAction::Touchdown, None);

        let outcome = tracker.save("t1", "2025-fall").await.unwrap();

        assert_eq!(outcome, SaveOutcome::Saved { players: 1 });
        let totals = repo.season_totals("t1", "2025-fall").await.unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].player_id, "p1");
    }

    #[tokio::test]
    async fn test_successful_save_clears_session_and_counts_one_game() {
        let (mut tracker, repo) = tracker_with_memory_repo();

        tracker.record_action("p1", StatAction::TdPass, None);
        tracker.record_action("p1", StatAction::Completion, None);

        let outcome = tracker.save("t1", "2025-fall").await.unwrap();

        assert_eq!(outcome, SaveOutcome::Saved { players: 1 });
        assert!(tracker.stats().is_empty());

        let totals = repo.season_totals("t1", "2025-fall").await.unwrap();
        assert_eq!(totals[0].qb_touchdowns, 1);
        assert_eq!(totals[0].qb_completions, 1);
        assert_eq!(totals[0].total_points, 6);
        assert_eq!(totals[0].games_played, 1);
    }

    #[tokio::test]
    async fn test_two_saved_sessions_accumulate_in_the_season_table() {
        let (mut tracker, repo) = tracker_with_memory_repo();

        tracker.record_action("p1", StatAction::Touchdown, None);
        tracker.save("t1", "2025-fall").await.unwrap();

        tracker.record_action("p1", StatAction::Safety, None);
        tracker.save("t1", "2025-fall").await.unwrap();

        let totals = repo.season_totals("t1", "2025-fall").await.unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total_points, 8);
        assert_eq!(totals[0].games_played, 2);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_session_intact_for_retry() {
        let mut tracker = GameSessionTracker::new(Arc::new(FailingSeasonStatsRepository));

        tracker.record_action("p1", StatAction::Touchdown, None);
        tracker.record_action("p2", StatAction::Interception, Some(6));
        let before = tracker.stats().clone();

        let err = tracker.save("t1", "2025-fall").await.unwrap_err();

        assert!(err.to_string().contains("storage unavailable"));
        assert_eq!(tracker.stats(), &before);
    }
}
