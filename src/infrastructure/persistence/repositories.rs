pub mod announcement_repository;
pub mod event_repository;
pub mod roster_repository;
pub mod rsvp_repository;
pub mod season_stats_repository;

pub use announcement_repository::SqliteAnnouncementRepository;
pub use event_repository::SqliteEventRepository;
pub use roster_repository::SqliteRosterRepository;
pub use rsvp_repository::SqliteRsvpRepository;
pub use season_stats_repository::SqliteSeasonStatsRepository;
