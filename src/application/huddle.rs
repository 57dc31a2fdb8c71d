use crate::domain::huddle::Announcement;
use crate::domain::repositories::AnnouncementRepository;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// The team huddle board: coach announcements, newest (and pinned) first.
pub struct HuddleService {
    announcements: Arc<dyn AnnouncementRepository>,
}

impl HuddleService {
    pub fn new(announcements: Arc<dyn AnnouncementRepository>) -> Self {
        Self { announcements }
    }

    pub async fn post(
        &self,
        team_id: &str,
        author: &str,
        title: &str,
        body: &str,
        pinned: bool,
    ) -> Result<Announcement> {
        let mut announcement = Announcement::new(team_id, author, title, body);
        if pinned {
            announcement = announcement.pinned();
        }
        self.announcements.post(&announcement).await?;
        info!("Huddle: {} posted '{}'", author, title);
        Ok(announcement)
    }

    pub async fn latest(&self, team_id: &str, limit: usize) -> Result<Vec<Announcement>> {
        self.announcements.latest(team_id, limit).await
    }
}
