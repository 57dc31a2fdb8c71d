use crate::domain::repositories::RosterRepository;
use crate::domain::roster::{Player, Position};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Roster management: adding, listing, and cutting players.
pub struct RosterService {
    roster: Arc<dyn RosterRepository>,
}

impl RosterService {
    pub fn new(roster: Arc<dyn RosterRepository>) -> Self {
        Self { roster }
    }

    pub async fn add_player(
        &self,
        team_id: &str,
        name: &str,
        jersey_number: u32,
        position: Position,
    ) -> Result<Player> {
        let player = Player::new(team_id, name, jersey_number, position);
        self.roster.add(&player).await?;
        info!(
            "Roster: added #{} {} ({}) to team {}",
            jersey_number, name, position, team_id
        );
        Ok(player)
    }

    pub async fn team(&self, team_id: &str) -> Result<Vec<Player>> {
        self.roster.list(team_id).await
    }

    pub async fn remove_player(&self, player_id: &str) -> Result<()> {
        self.roster.remove(player_id).await?;
        info!("Roster: removed player {}", player_id);
        Ok(())
    }
}
