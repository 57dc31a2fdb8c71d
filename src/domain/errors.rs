use thiserror::Error;

/// Errors related to stat entry and session persistence
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Unknown action tag: {tag}")]
    UnknownAction { tag: String },

    #[error("Failed to save session stats for team {team_id}, season {season}: {reason}")]
    SaveFailed {
        team_id: String,
        season: String,
        reason: String,
    },
}

/// Errors related to the team schedule and RSVPs
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Invalid RSVP status: {status}")]
    InvalidRsvpStatus { status: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_error_formatting() {
        let err = StatsError::SaveFailed {
            team_id: "tigers".to_string(),
            season: "2025-fall".to_string(),
            reason: "connection reset".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("tigers"));
        assert!(msg.contains("2025-fall"));
        assert!(msg.contains("connection reset"));
    }

    #[test]
    fn test_schedule_error_formatting() {
        let err = ScheduleError::EventNotFound {
            event_id: "ev-42".to_string(),
        };
        assert!(err.to_string().contains("ev-42"));
    }
}
