use crate::domain::errors::ScheduleError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Game,
    Practice,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Game => write!(f, "game"),
            EventKind::Practice => write!(f, "practice"),
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "game" => Ok(EventKind::Game),
            "practice" => Ok(EventKind::Practice),
            _ => anyhow::bail!("Invalid event kind: {}. Must be 'game' or 'practice'", s),
        }
    }
}

/// A scheduled team event: a game against an opponent, or a practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEvent {
    pub id: String,
    pub team_id: String,
    pub kind: EventKind,
    /// Set for games, absent for practices.
    pub opponent: Option<String>,
    pub start_time: DateTime<Utc>,
    pub location: String,
    pub notes: Option<String>,
}

impl TeamEvent {
    pub fn new(
        team_id: &str,
        kind: EventKind,
        opponent: Option<String>,
        start_time: DateTime<Utc>,
        location: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            team_id: team_id.to_string(),
            kind,
            opponent,
            start_time,
            location: location.to_string(),
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Going,
    NotGoing,
    Maybe,
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsvpStatus::Going => write!(f, "going"),
            RsvpStatus::NotGoing => write!(f, "not_going"),
            RsvpStatus::Maybe => write!(f, "maybe"),
        }
    }
}

impl std::str::FromStr for RsvpStatus {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "going" | "yes" => Ok(RsvpStatus::Going),
            "not_going" | "no" => Ok(RsvpStatus::NotGoing),
            "maybe" => Ok(RsvpStatus::Maybe),
            other => Err(ScheduleError::InvalidRsvpStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// One player's reply to one event. Overwritten when the player replies again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsvp {
    pub event_id: String,
    pub player_id: String,
    pub status: RsvpStatus,
    pub updated_at: DateTime<Utc>,
}

/// Attendance counts for one event, measured against the full roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpTally {
    pub going: usize,
    pub not_going: usize,
    pub maybe: usize,
    pub no_response: usize,
}

impl RsvpTally {
    /// Tally replies against the roster size. Replies from players no longer
    /// on the roster still count toward their status bucket.
    pub fn from_replies(roster_size: usize, replies: &[Rsvp]) -> Self {
        let mut tally = RsvpTally::default();
        for reply in replies {
            match reply.status {
                RsvpStatus::Going => tally.going += 1,
                RsvpStatus::NotGoing => tally.not_going += 1,
                RsvpStatus::Maybe => tally.maybe += 1,
            }
        }
        tally.no_response = roster_size.saturating_sub(replies.len());
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(player: &str, status: RsvpStatus) -> Rsvp {
        Rsvp {
            event_id: "ev-1".to_string(),
            player_id: player.to_string(),
            status,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_tally_counts_each_status_and_non_responders() {
        let replies = vec![
            reply("p1", RsvpStatus::Going),
            reply("p2", RsvpStatus::Going),
            reply("p3", RsvpStatus::Maybe),
            reply("p4", RsvpStatus::NotGoing),
        ];

        let tally = RsvpTally::from_replies(7, &replies);

        assert_eq!(tally.going, 2);
        assert_eq!(tally.maybe, 1);
        assert_eq!(tally.not_going, 1);
        assert_eq!(tally.no_response, 3);
    }

    #[test]
    fn test_tally_does_not_underflow_when_roster_shrank() {
        let replies = vec![
            reply("p1", RsvpStatus::Going),
            reply("p2", RsvpStatus::Going),
        ];

        let tally = RsvpTally::from_replies(1, &replies);
        assert_eq!(tally.going, 2);
        assert_eq!(tally.no_response, 0);
    }

    #[test]
    fn test_rsvp_status_parsing() {
        assert_eq!("yes".parse::<RsvpStatus>().unwrap(), RsvpStatus::Going);
        assert_eq!("NO".parse::<RsvpStatus>().unwrap(), RsvpStatus::NotGoing);
        assert!("perhaps".parse::<RsvpStatus>().is_err());
    }
}
