//! End-to-end flow against a real (in-memory) SQLite database: build a
//! roster, track two live games, and check the season leaderboard and RSVPs.

use chrono::{Duration, TimeZone, Utc};
use sideline::application::game_session::{GameSessionTracker, SaveOutcome};
use sideline::application::leaderboard::LeaderboardService;
use sideline::application::roster::RosterService;
use sideline::application::schedule::ScheduleService;
use sideline::domain::leaderboard::LeaderboardCategory;
use sideline::domain::repositories::SeasonStatsRepository;
use sideline::domain::roster::Position;
use sideline::domain::schedule::{EventKind, RsvpStatus};
use sideline::domain::stats::StatAction;
use sideline::infrastructure::persistence::{
    Database, SqliteEventRepository, SqliteRosterRepository, SqliteRsvpRepository,
    SqliteSeasonStatsRepository,
};
use std::sync::Arc;

const TEAM: &str = "tigers";
const SEASON: &str = "2025-fall";

#[tokio::test]
async fn two_games_accumulate_into_the_leaderboard() {
    let db = Database::in_memory().await.unwrap();
    let stats_repo = Arc::new(SqliteSeasonStatsRepository::new(db.pool.clone()));
    let roster_repo = Arc::new(SqliteRosterRepository::new(db.pool.clone()));

    let roster = RosterService::new(roster_repo.clone());
    let qb = roster
        .add_player(TEAM, "Ada Park", 12, Position::Quarterback)
        .await
        .unwrap();
    let wr = roster
        .add_player(TEAM, "Ben Ruiz", 4, Position::Receiver)
        .await
        .unwrap();
    let def = roster
        .add_player(TEAM, "Cam Diaz", 7, Position::Defender)
        .await
        .unwrap();

    // Game one
    let mut tracker = GameSessionTracker::new(stats_repo.clone());
    tracker.record_action(&qb.id, StatAction::Completion, None);
    tracker.record_action(&qb.id, StatAction::TdPass, None);
    tracker.record_action(&wr.id, StatAction::Reception, None);
    tracker.record_action(&wr.id, StatAction::Touchdown, None);
    tracker.record_action(&def.id, StatAction::FlagPull, None);
    let outcome = tracker.save(TEAM, SEASON).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Saved { players: 3 });
    assert!(tracker.stats().is_empty());

    // Game two: same tracker reused after the save cleared it
    tracker.record_action(&def.id, StatAction::Interception, Some(6));
    tracker.record_action(&wr.id, StatAction::ExtraPoint2, None);
    tracker.record_action(&qb.id, StatAction::ExtraPoint1, None);
    tracker.save(TEAM, SEASON).await.unwrap();

    let leaderboard = LeaderboardService::new(stats_repo.clone(), roster_repo.clone());
    let board = leaderboard
        .standings(TEAM, SEASON, LeaderboardCategory::TotalPoints)
        .await
        .unwrap();

    assert_eq!(board.len(), 3);
    assert_eq!(board[0].player_name, "Ben Ruiz");
    assert_eq!(board[0].score, 8); // touchdown 6 + extra_point_2
    assert_eq!(board[0].games_played, 2);
    assert_eq!(board[1].player_name, "Ada Park");
    assert_eq!(board[1].score, 7); // td_pass 6 + extra_point_1
    assert_eq!(board[1].games_played, 2);
    assert_eq!(board[2].player_name, "Cam Diaz");
    assert_eq!(board[2].score, 6); // pick-six
    assert_eq!(board[2].games_played, 2);

    // Pick-six shows up under the defense category too
    let defense = leaderboard
        .standings(TEAM, SEASON, LeaderboardCategory::Defense)
        .await
        .unwrap();
    assert_eq!(defense[0].player_name, "Cam Diaz");
    assert_eq!(defense[0].score, 2); // flag pull + interception

    let totals = stats_repo.season_totals(TEAM, SEASON).await.unwrap();
    let cam = totals.iter().find(|l| l.player_id == def.id).unwrap();
    assert_eq!(cam.pick_six, 1);
}

#[tokio::test]
async fn abandoned_session_leaves_the_season_table_untouched() {
    let db = Database::in_memory().await.unwrap();
    let stats_repo = Arc::new(SqliteSeasonStatsRepository::new(db.pool.clone()));

    let mut tracker = GameSessionTracker::new(stats_repo.clone());
    tracker.record_action("p1", StatAction::Touchdown, None);
    tracker.reset();

    let outcome = tracker.save(TEAM, SEASON).await.unwrap();
    assert_eq!(outcome, SaveOutcome::NothingToSave);
    assert!(stats_repo.season_totals(TEAM, SEASON).await.unwrap().is_empty());
}

#[tokio::test]
async fn schedule_and_rsvp_flow() {
    let db = Database::in_memory().await.unwrap();
    let roster_repo = Arc::new(SqliteRosterRepository::new(db.pool.clone()));
    let schedule = ScheduleService::new(
        Arc::new(SqliteEventRepository::new(db.pool.clone())),
        Arc::new(SqliteRsvpRepository::new(db.pool.clone())),
        roster_repo.clone(),
    );
    let roster = RosterService::new(roster_repo);

    let ada = roster
        .add_player(TEAM, "Ada Park", 12, Position::Quarterback)
        .await
        .unwrap();
    roster
        .add_player(TEAM, "Ben Ruiz", 4, Position::Receiver)
        .await
        .unwrap();

    let kickoff = Utc.with_ymd_and_hms(2025, 9, 6, 9, 0, 0).unwrap();
    let game = schedule
        .add_event(TEAM, EventKind::Game, Some("Sharks".into()), kickoff, "Field A")
        .await
        .unwrap();
    schedule
        .add_event(TEAM, EventKind::Practice, None, kickoff - Duration::days(2), "Field B")
        .await
        .unwrap();

    let upcoming = schedule
        .upcoming(TEAM, kickoff - Duration::days(3))
        .await
        .unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].kind, EventKind::Practice);

    schedule
        .set_rsvp(&game.id, &ada.id, RsvpStatus::Maybe)
        .await
        .unwrap();
    schedule
        .set_rsvp(&game.id, &ada.id, RsvpStatus::Going)
        .await
        .unwrap();

    let tally = schedule.tally(&game.id).await.unwrap();
    assert_eq!(tally.going, 1);
    assert_eq!(tally.maybe, 0);
    assert_eq!(tally.no_response, 1);

    let err = schedule
        .set_rsvp("missing-event", &ada.id, RsvpStatus::Going)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("missing-event"));
}
