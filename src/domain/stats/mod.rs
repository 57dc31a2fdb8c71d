//! Live-game stat tracking domain: action tags, per-session counters, and
//! persisted season stat lines.

pub mod action;
pub mod player_stats;
pub mod season;

pub use action::StatAction;
pub use player_stats::{PICK_SIX_THRESHOLD, PlayerSessionStats};
pub use season::PlayerSeasonStats;
