use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Quarterback,
    Receiver,
    Runner,
    Center,
    Rusher,
    Defender,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Quarterback => write!(f, "QB"),
            Position::Receiver => write!(f, "WR"),
            Position::Runner => write!(f, "RB"),
            Position::Center => write!(f, "C"),
            Position::Rusher => write!(f, "RUSH"),
            Position::Defender => write!(f, "DEF"),
        }
    }
}

impl std::str::FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "qb" | "quarterback" => Ok(Position::Quarterback),
            "wr" | "receiver" => Ok(Position::Receiver),
            "rb" | "runner" => Ok(Position::Runner),
            "c" | "center" => Ok(Position::Center),
            "rush" | "rusher" => Ok(Position::Rusher),
            "def" | "defender" => Ok(Position::Defender),
            _ => anyhow::bail!(
                "Invalid position: {}. Must be one of qb, wr, rb, c, rush, def",
                s
            ),
        }
    }
}

/// One player on a team's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub jersey_number: u32,
    pub position: Position,
}

impl Player {
    pub fn new(team_id: &str, name: &str, jersey_number: u32, position: Position) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            team_id: team_id.to_string(),
            name: name.to_string(),
            jersey_number,
            position,
        }
    }
}
