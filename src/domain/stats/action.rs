use crate::domain::errors::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One discrete scoreable (or trackable) thing a player did during a live game.
///
/// The set is closed on purpose: stat entry arrives as free-form tags from the
/// scorekeeper UI, and parsing them up front means an unrecognized tag is
/// rejected at the boundary instead of silently hitting a default branch deep
/// in the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatAction {
    Completion,
    TdPass,
    TdRun,
    Run,
    Reception,
    Touchdown,
    #[serde(rename = "extra_point_1")]
    ExtraPoint1,
    #[serde(rename = "extra_point_2")]
    ExtraPoint2,
    Interception,
    FlagPull,
    Safety,
    Sack,
    Fumble,
    InterceptionThrown,
}

impl StatAction {
    /// Point value applied when the scorekeeper does not supply one explicitly.
    ///
    /// `Interception` defaults to 0: it only scores when the scorekeeper
    /// passes the return points explicitly (see `PlayerSessionStats::record`).
    pub fn default_points(&self) -> u32 {
        match self {
            StatAction::TdPass | StatAction::TdRun | StatAction::Touchdown => 6,
            StatAction::ExtraPoint1 => 1,
            StatAction::ExtraPoint2 => 2,
            StatAction::Safety => 2,
            StatAction::Completion
            | StatAction::Run
            | StatAction::Reception
            | StatAction::Interception
            | StatAction::FlagPull
            | StatAction::Sack
            | StatAction::Fumble
            | StatAction::InterceptionThrown => 0,
        }
    }

    /// The wire/CLI tag for this action.
    pub fn tag(&self) -> &'static str {
        match self {
            StatAction::Completion => "completion",
            StatAction::TdPass => "td_pass",
            StatAction::TdRun => "td_run",
            StatAction::Run => "run",
            StatAction::Reception => "reception",
            StatAction::Touchdown => "touchdown",
            StatAction::ExtraPoint1 => "extra_point_1",
            StatAction::ExtraPoint2 => "extra_point_2",
            StatAction::Interception => "interception",
            StatAction::FlagPull => "flag_pull",
            StatAction::Safety => "safety",
            StatAction::Sack => "sack",
            StatAction::Fumble => "fumble",
            StatAction::InterceptionThrown => "interception_thrown",
        }
    }
}

impl fmt::Display for StatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for StatAction {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completion" => Ok(StatAction::Completion),
            "td_pass" => Ok(StatAction::TdPass),
            "td_run" => Ok(StatAction::TdRun),
            "run" => Ok(StatAction::Run),
            "reception" => Ok(StatAction::Reception),
            "touchdown" => Ok(StatAction::Touchdown),
            "extra_point_1" => Ok(StatAction::ExtraPoint1),
            "extra_point_2" => Ok(StatAction::ExtraPoint2),
            "interception" => Ok(StatAction::Interception),
            "flag_pull" => Ok(StatAction::FlagPull),
            "safety" => Ok(StatAction::Safety),
            "sack" => Ok(StatAction::Sack),
            "fumble" => Ok(StatAction::Fumble),
            "interception_thrown" => Ok(StatAction::InterceptionThrown),
            other => Err(StatsError::UnknownAction {
                tag: other.to_string(),
            }),
        }
    }
}
