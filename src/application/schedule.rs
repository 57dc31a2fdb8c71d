use crate::domain::errors::ScheduleError;
use crate::domain::repositories::{EventRepository, RosterRepository, RsvpRepository};
use crate::domain::schedule::{EventKind, RsvpStatus, RsvpTally, TeamEvent};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Team calendar operations: scheduling, upcoming events, and RSVPs.
pub struct ScheduleService {
    events: Arc<dyn EventRepository>,
    rsvps: Arc<dyn RsvpRepository>,
    roster: Arc<dyn RosterRepository>,
}

impl ScheduleService {
    pub fn new(
        events: Arc<dyn EventRepository>,
        rsvps: Arc<dyn RsvpRepository>,
        roster: Arc<dyn RosterRepository>,
    ) -> Self {
        Self {
            events,
            rsvps,
            roster,
        }
    }

    pub async fn add_event(
        &self,
        team_id: &str,
        kind: EventKind,
        opponent: Option<String>,
        start_time: DateTime<Utc>,
        location: &str,
    ) -> Result<TeamEvent> {
        let event = TeamEvent::new(team_id, kind, opponent, start_time, location);
        self.events.add(&event).await?;
        info!(
            "Schedule: added {} at {} on {}",
            event.kind, event.location, event.start_time
        );
        Ok(event)
    }

    pub async fn upcoming(&self, team_id: &str, from: DateTime<Utc>) -> Result<Vec<TeamEvent>> {
        self.events.upcoming(team_id, from).await
    }

    /// Record a player's reply. The event must exist; replying again
    /// overwrites the previous status.
    pub async fn set_rsvp(
        &self,
        event_id: &str,
        player_id: &str,
        status: RsvpStatus,
    ) -> Result<()> {
        if self.events.find(event_id).await?.is_none() {
            return Err(ScheduleError::EventNotFound {
                event_id: event_id.to_string(),
            }
            .into());
        }

        self.rsvps.set(event_id, player_id, status).await?;
        info!("Schedule: {} replied {} to {}", player_id, status, event_id);
        Ok(())
    }

    /// Attendance counts for one event measured against the current roster.
    pub async fn tally(&self, event_id: &str) -> Result<RsvpTally> {
        let event = self.events.find(event_id).await?.ok_or_else(|| {
            ScheduleError::EventNotFound {
                event_id: event_id.to_string(),
            }
        })?;

        let roster = self.roster.list(&event.team_id).await?;
        let replies = self.rsvps.for_event(event_id).await?;
        Ok(RsvpTally::from_replies(roster.len(), &replies))
    }
}
