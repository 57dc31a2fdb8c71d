use crate::domain::stats::PlayerSessionStats;
use serde::{Deserialize, Serialize};

/// One player's accumulated stat line for a season, as persisted.
///
/// Rows are keyed by `(player_id, team_id, season)`; a saved game session
/// contributes one delta row per player (with `games_played = 1`) and the
/// storage layer merges deltas additively into the season totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeasonStats {
    pub player_id: String,
    pub team_id: String,
    pub season: String,
    pub qb_completions: u32,
    pub qb_touchdowns: u32,
    pub qb_td_points: u32,
    pub runs: u32,
    pub receptions: u32,
    pub player_td_points: u32,
    pub extra_point_1: u32,
    pub extra_point_2: u32,
    pub def_interceptions: u32,
    pub pick_six: u32,
    pub flag_pulls: u32,
    pub safeties: u32,
    pub sacks: u32,
    pub fumbles: u32,
    pub interceptions_thrown: u32,
    pub total_points: u32,
    pub games_played: u32,
}

impl PlayerSeasonStats {
    /// Build the delta row one finished session contributes for a player.
    pub fn session_delta(
        player_id: &str,
        team_id: &str,
        season: &str,
        session: &PlayerSessionStats,
    ) -> Self {
        Self {
            player_id: player_id.to_string(),
            team_id: team_id.to_string(),
            season: season.to_string(),
            qb_completions: session.qb_completions,
            qb_touchdowns: session.qb_touchdowns,
            qb_td_points: session.qb_td_points,
            runs: session.runs,
            receptions: session.receptions,
            player_td_points: session.player_td_points,
            extra_point_1: session.extra_point_1,
            extra_point_2: session.extra_point_2,
            def_interceptions: session.def_interceptions,
            pick_six: session.pick_six,
            flag_pulls: session.flag_pulls,
            safeties: session.safeties,
            sacks: session.sacks,
            fumbles: session.fumbles,
            interceptions_thrown: session.interceptions_thrown,
            total_points: session.total_points,
            games_played: 1,
        }
    }

    /// Fold another row for the same (player, team, season) into this one.
    /// Mirrors the additive merge the SQL upsert performs on conflict.
    pub fn merge(&mut self, other: &PlayerSeasonStats) {
        self.qb_completions += other.qb_completions;
        self.qb_touchdowns += other.qb_touchdowns;
        self.qb_td_points += other.qb_td_points;
        self.runs += other.runs;
        self.receptions += other.receptions;
        self.player_td_points += other.player_td_points;
        self.extra_point_1 += other.extra_point_1;
        self.extra_point_2 += other.extra_point_2;
        self.def_interceptions += other.def_interceptions;
        self.pick_six += other.pick_six;
        self.flag_pulls += other.flag_pulls;
        self.safeties += other.safeties;
        self.sacks += other.sacks;
        self.fumbles += other.fumbles;
        self.interceptions_thrown += other.interceptions_thrown;
        self.total_points += other.total_points;
        self.games_played += other.games_played;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::StatAction;

    #[test]
    fn test_session_delta_carries_counters_and_one_game() {
        let mut session = PlayerSessionStats::default();
        session.record(StatAction::TdPass, None);
        session.record(StatAction::Completion, None);

        let delta = PlayerSeasonStats::session_delta("p1", "t1", "2025-fall", &session);

        assert_eq!(delta.player_id, "p1");
        assert_eq!(delta.qb_touchdowns, 1);
        assert_eq!(delta.qb_completions, 1);
        assert_eq!(delta.total_points, 6);
        assert_eq!(delta.games_played, 1);
    }

    #[test]
    fn test_merge_accumulates_two_sessions() {
        let mut first = PlayerSessionStats::default();
        first.record(StatAction::Touchdown, None);
        let mut second = PlayerSessionStats::default();
        second.record(StatAction::Safety, None);

        let mut total = PlayerSeasonStats::session_delta("p1", "t1", "2025-fall", &first);
        total.merge(&PlayerSeasonStats::session_delta(
            "p1", "t1", "2025-fall", &second,
        ));

        assert_eq!(total.player_td_points, 6);
        assert_eq!(total.safeties, 1);
        assert_eq!(total.total_points, 8);
        assert_eq!(total.games_played, 2);
    }
}
