pub mod persistence;
pub mod repositories;

pub use repositories::{InMemoryRosterRepository, InMemorySeasonStatsRepository};
