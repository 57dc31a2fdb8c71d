// Roster domain
pub mod roster;

// Schedule and RSVP domain
pub mod schedule;

// Huddle announcement board
pub mod huddle;

// Live-game and season stat tracking
pub mod stats;

// Season leaderboard ranking
pub mod leaderboard;

// Repository traits
pub mod repositories;

// Domain-specific error types
pub mod errors;
