use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A coach announcement posted to the team huddle board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub team_id: String,
    pub author: String,
    pub title: String,
    pub body: String,
    /// Pinned announcements sort ahead of everything else.
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    pub fn new(team_id: &str, author: &str, title: &str, body: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            team_id: team_id.to_string(),
            author: author.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            pinned: false,
            created_at: Utc::now(),
        }
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }
}
