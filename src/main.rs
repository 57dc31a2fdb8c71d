//! Sideline - team management CLI
//!
//! Runs roster, schedule, huddle, live stat-entry and leaderboard commands
//! against the configured SQLite database.
//!
//! # Usage
//! ```sh
//! TEAM_ID=tigers SEASON=2025-fall cargo run -- leaderboard --category points
//! ```
//!
//! # Environment Variables
//! - `DATABASE_URL` - SQLite database (default: sqlite://data/sideline.db)
//! - `TEAM_ID` - team all commands operate on (default: default)
//! - `SEASON` - season key for stats commands (default: 2025-fall)
//! - `HUDDLE_PAGE_SIZE` - announcements shown by `huddle list` (default: 10)

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use sideline::application::game_session::{GameSessionTracker, SaveOutcome};
use sideline::application::huddle::HuddleService;
use sideline::application::leaderboard::LeaderboardService;
use sideline::application::roster::RosterService;
use sideline::application::schedule::ScheduleService;
use sideline::config::Config;
use sideline::domain::leaderboard::LeaderboardCategory;
use sideline::domain::roster::Position;
use sideline::domain::schedule::{EventKind, RsvpStatus};
use sideline::infrastructure::persistence::{
    Database, SqliteAnnouncementRepository, SqliteEventRepository, SqliteRosterRepository,
    SqliteRsvpRepository, SqliteSeasonStatsRepository,
};
use std::io::BufRead;
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "sideline", about = "Youth flag-football team management")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the team roster
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
    /// Manage games and practices
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommand,
    },
    /// Reply to or tally an event's RSVPs
    Rsvp {
        #[command(subcommand)]
        command: RsvpCommand,
    },
    /// Post to or read the huddle board
    Huddle {
        #[command(subcommand)]
        command: HuddleCommand,
    },
    /// Live stat entry for one game, read from stdin
    Game,
    /// Season standings
    Leaderboard {
        /// points | passing | receiving | rushing | defense
        #[arg(long, default_value = "points")]
        category: LeaderboardCategory,
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum RosterCommand {
    Add {
        name: String,
        #[arg(long)]
        number: u32,
        /// qb | wr | rb | c | rush | def
        #[arg(long)]
        position: Position,
    },
    List,
}

#[derive(Subcommand)]
enum ScheduleCommand {
    Add {
        /// game | practice
        kind: EventKind,
        /// RFC 3339 start time, e.g. 2025-09-06T09:00:00Z
        #[arg(long)]
        at: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        opponent: Option<String>,
    },
    List,
}

#[derive(Subcommand)]
enum RsvpCommand {
    Set {
        event_id: String,
        player_id: String,
        /// going | not_going | maybe
        status: RsvpStatus,
    },
    Tally {
        event_id: String,
    },
}

#[derive(Subcommand)]
enum HuddleCommand {
    Post {
        title: String,
        body: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        pinned: bool,
    },
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let db = Database::new(&config.database_url).await?;

    match cli.command {
        Command::Roster { command } => run_roster(command, &config, &db).await,
        Command::Schedule { command } => run_schedule(command, &config, &db).await,
        Command::Rsvp { command } => run_rsvp(command, &db).await,
        Command::Huddle { command } => run_huddle(command, &config, &db).await,
        Command::Game => run_game(&config, &db).await,
        Command::Leaderboard { category, json } => {
            run_leaderboard(category, json, &config, &db).await
        }
    }
}

async fn run_roster(command: RosterCommand, config: &Config, db: &Database) -> Result<()> {
    let service = RosterService::new(Arc::new(SqliteRosterRepository::new(db.pool.clone())));

    match command {
        RosterCommand::Add {
            name,
            number,
            position,
        } => {
            let player = service
                .add_player(&config.team_id, &name, number, position)
                .await?;
            println!("Added #{} {} ({})", player.jersey_number, player.name, player.id);
        }
        RosterCommand::List => {
            for player in service.team(&config.team_id).await? {
                println!(
                    "#{:<3} {:<24} {:<5} {}",
                    player.jersey_number, player.name, player.position, player.id
                );
            }
        }
    }
    Ok(())
}

async fn run_schedule(command: ScheduleCommand, config: &Config, db: &Database) -> Result<()> {
    let service = schedule_service(db);

    match command {
        ScheduleCommand::Add {
            kind,
            at,
            location,
            opponent,
        } => {
            let start_time = DateTime::parse_from_rfc3339(&at)
                .with_context(|| format!("Invalid start time: {at}"))?
                .with_timezone(&Utc);
            let event = service
                .add_event(&config.team_id, kind, opponent, start_time, &location)
                .await?;
            println!("Scheduled {} {} ({})", event.kind, event.start_time, event.id);
        }
        ScheduleCommand::List => {
            for event in service.upcoming(&config.team_id, Utc::now()).await? {
                let opponent = event.opponent.as_deref().unwrap_or("-");
                println!(
                    "{}  {:<9} vs {:<20} @ {:<20} {}",
                    event.start_time, event.kind, opponent, event.location, event.id
                );
            }
        }
    }
    Ok(())
}

async fn run_rsvp(command: RsvpCommand, db: &Database) -> Result<()> {
    let service = schedule_service(db);

    match command {
        RsvpCommand::Set {
            event_id,
            player_id,
            status,
        } => {
            service.set_rsvp(&event_id, &player_id, status).await?;
            println!("RSVP recorded: {status}");
        }
        RsvpCommand::Tally { event_id } => {
            let tally = service.tally(&event_id).await?;
            println!(
                "going: {}  maybe: {}  not going: {}  no response: {}",
                tally.going, tally.maybe, tally.not_going, tally.no_response
            );
        }
    }
    Ok(())
}

async fn run_huddle(command: HuddleCommand, config: &Config, db: &Database) -> Result<()> {
    let service = HuddleService::new(Arc::new(SqliteAnnouncementRepository::new(db.pool.clone())));

    match command {
        HuddleCommand::Post {
            title,
            body,
            author,
            pinned,
        } => {
            let posted = service
                .post(&config.team_id, &author, &title, &body, pinned)
                .await?;
            println!("Posted '{}' ({})", posted.title, posted.id);
        }
        HuddleCommand::List => {
            for a in service.latest(&config.team_id, config.huddle_page_size).await? {
                let pin = if a.pinned { "*" } else { " " };
                println!("{pin} [{}] {} by {}", a.created_at.date_naive(), a.title, a.author);
                println!("    {}", a.body);
            }
        }
    }
    Ok(())
}

/// Live stat entry. Each stdin line is `<player_id> <action> [points]`;
/// unknown action tags are warned about and skipped. End of input saves the
/// session; a `discard` line abandons it.
async fn run_game(config: &Config, db: &Database) -> Result<()> {
    let repository = Arc::new(SqliteSeasonStatsRepository::new(db.pool.clone()));
    let mut tracker = GameSessionTracker::new(repository);

    info!(
        "Stat entry for team {} ({}). Lines: <player_id> <action> [points]; 'discard' to abandon.",
        config.team_id, config.season
    );

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stat entry line")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("discard") {
            tracker.reset();
            println!("Session discarded.");
            return Ok(());
        }

        let mut parts = line.split_whitespace();
        let (Some(player_id), Some(tag)) = (parts.next(), parts.next()) else {
            warn!("Skipping malformed line: {}", line);
            continue;
        };
        let points = match parts.next().map(str::parse::<u32>) {
            None => None,
            Some(Ok(points)) => Some(points),
            Some(Err(_)) => {
                warn!("Skipping line with bad point value: {}", line);
                continue;
            }
        };

        tracker.record_tagged(player_id, tag, points);
    }

    match tracker.save(&config.team_id, &config.season).await? {
        SaveOutcome::NothingToSave => println!("No stats to save."),
        SaveOutcome::Saved { players } => println!("Saved stats for {players} players."),
    }
    Ok(())
}

async fn run_leaderboard(
    category: LeaderboardCategory,
    json: bool,
    config: &Config,
    db: &Database,
) -> Result<()> {
    let service = LeaderboardService::new(
        Arc::new(SqliteSeasonStatsRepository::new(db.pool.clone())),
        Arc::new(SqliteRosterRepository::new(db.pool.clone())),
    );

    let board = service
        .standings(&config.team_id, &config.season, category)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        println!("{category} leaderboard for {} ({})", config.team_id, config.season);
        for entry in board {
            println!(
                "{:>3}. {:<24} {:>5}  ({} games)",
                entry.rank, entry.player_name, entry.score, entry.games_played
            );
        }
    }
    Ok(())
}

fn schedule_service(db: &Database) -> ScheduleService {
    ScheduleService::new(
        Arc::new(SqliteEventRepository::new(db.pool.clone())),
        Arc::new(SqliteRsvpRepository::new(db.pool.clone())),
        Arc::new(SqliteRosterRepository::new(db.pool.clone())),
    )
}
