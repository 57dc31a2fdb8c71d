// Live game stat-entry session
pub mod game_session;

// Season standings
pub mod leaderboard;

// Team calendar and RSVPs
pub mod schedule;

// Huddle announcement board
pub mod huddle;

// Roster management
pub mod roster;

pub use game_session::{GameSessionTracker, SaveOutcome};
