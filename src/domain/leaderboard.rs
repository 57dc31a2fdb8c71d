use crate::domain::stats::PlayerSeasonStats;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardCategory {
    TotalPoints,
    Passing,
    Receiving,
    Rushing,
    Defense,
}

impl LeaderboardCategory {
    /// The value a season stat line is ranked on within this category.
    pub fn score(&self, line: &PlayerSeasonStats) -> u32 {
        match self {
            LeaderboardCategory::TotalPoints => line.total_points,
            LeaderboardCategory::Passing => line.qb_td_points + line.qb_completions,
            LeaderboardCategory::Receiving => line.receptions + line.player_td_points,
            LeaderboardCategory::Rushing => line.runs,
            LeaderboardCategory::Defense => {
                line.flag_pulls + line.def_interceptions + line.sacks + line.safeties
            }
        }
    }
}

impl fmt::Display for LeaderboardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardCategory::TotalPoints => write!(f, "total_points"),
            LeaderboardCategory::Passing => write!(f, "passing"),
            LeaderboardCategory::Receiving => write!(f, "receiving"),
            LeaderboardCategory::Rushing => write!(f, "rushing"),
            LeaderboardCategory::Defense => write!(f, "defense"),
        }
    }
}

impl std::str::FromStr for LeaderboardCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "total_points" | "points" => Ok(LeaderboardCategory::TotalPoints),
            "passing" => Ok(LeaderboardCategory::Passing),
            "receiving" => Ok(LeaderboardCategory::Receiving),
            "rushing" => Ok(LeaderboardCategory::Rushing),
            "defense" => Ok(LeaderboardCategory::Defense),
            _ => anyhow::bail!(
                "Invalid leaderboard category: {}. Must be one of points, passing, receiving, rushing, defense",
                s
            ),
        }
    }
}

/// One row of a ranked leaderboard. Tied scores share a rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player_id: String,
    pub player_name: String,
    pub score: u32,
    pub games_played: u32,
}

/// Rank season stat lines for one category, highest score first.
///
/// Ties share a rank and the next distinct score takes the following
/// positional rank (1, 2, 2, 4). Within a tie, ordering falls back to
/// player id so output is deterministic.
pub fn rank(
    category: LeaderboardCategory,
    lines: &[PlayerSeasonStats],
    name_of: impl Fn(&str) -> Option<String>,
) -> Vec<LeaderboardEntry> {
    let mut scored: Vec<(&PlayerSeasonStats, u32)> = lines
        .iter()
        .map(|line| (line, category.score(line)))
        .collect();
    scored.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then_with(|| a.player_id.cmp(&b.player_id)));

    let mut entries = Vec::with_capacity(scored.len());
    let mut last_score = None;
    let mut rank = 0;
    for (position, (line, score)) in scored.iter().enumerate() {
        if last_score != Some(*score) {
            rank = position + 1;
            last_score = Some(*score);
        }
        entries.push(LeaderboardEntry {
            rank,
            player_id: line.player_id.clone(),
            player_name: name_of(&line.player_id).unwrap_or_else(|| line.player_id.clone()),
            score: *score,
            games_played: line.games_played,
        });
    }
    entries
}
