use crate::domain::stats::StatAction;
use serde::{Deserialize, Serialize};

/// Points at or above which an interception return counts as a pick-six.
///
/// The accumulator enforces the threshold itself rather than trusting the
/// caller to bump a separate counter (the scorekeeper only supplies the
/// return points).
pub const PICK_SIX_THRESHOLD: u32 = 6;

/// Running counters for one player within one live game session.
///
/// `total_points` is advanced by the point contribution of each recorded
/// action, never recomputed from the counters afterwards. That distinction
/// matters for interceptions, which score conditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSessionStats {
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
}

impl PlayerSessionStats {
    /// Apply one action's effect. Returns the points the action contributed.
    ///
    /// Only scoring actions honor an explicit point value; the zero-point
    /// rows of the mapping contribute nothing even if the scorekeeper tacks
    /// a number onto the entry.
    pub fn record(&mut self, action: StatAction, explicit_points: Option<u32>) -> u32 {
        let scored = explicit_points.unwrap_or_else(|| action.default_points());

        let points = match action {
            StatAction::Completion => {
                self.qb_completions += 1;
                0
            }
            StatAction::TdPass => {
                self.qb_touchdowns += 1;
                self.qb_td_points += scored;
                scored
            }
            StatAction::TdRun => {
                self.qb_td_points += scored;
                scored
            }
            StatAction::Run => {
                self.runs += 1;
                0
            }
            StatAction::Reception => {
                self.receptions += 1;
                0
            }
            StatAction::Touchdown => {
                self.player_td_points += scored;
                scored
            }
            StatAction::ExtraPoint1 => {
                self.extra_point_1 += 1;
                scored
            }
            StatAction::ExtraPoint2 => {
                self.extra_point_2 += 1;
                scored
            }
            StatAction::Interception => {
                self.def_interceptions += 1;
                if scored >= PICK_SIX_THRESHOLD {
                    self.pick_six += 1;
                }
                scored
            }
            StatAction::FlagPull => {
                self.flag_pulls += 1;
                0
            }
            StatAction::Safety => {
                self.safeties += 1;
                scored
            }
            StatAction::Sack => {
                self.sacks += 1;
                0
            }
            StatAction::Fumble => {
                self.fumbles += 1;
                0
            }
            StatAction::InterceptionThrown => {
                self.interceptions_thrown += 1;
                0
            }
        };

        self.total_points += points;
        points
    }

    /// True if no action has touched this record since initialization.
    pub fn is_empty(&self) -> bool {
        *self == PlayerSessionStats::default()
    }
}
