use crate::domain::repositories::SeasonStatsRepository;
use crate::domain::stats::PlayerSeasonStats;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct SqliteSeasonStatsRepository {
    pool: SqlitePool,
}

impl SqliteSeasonStatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_line(row: &sqlx::sqlite::SqliteRow) -> Result<PlayerSeasonStats> {
    Ok(PlayerSeasonStats {
        player_id: row.try_get("player_id")?,
        team_id: row.try_get("team_id")?,
        season: row.try_get("season")?,
        qb_completions: row.try_get("qb_completions")?,
        qb_touchdowns: row.try_get("qb_touchdowns")?,
        qb_td_points: row.try_get("qb_td_points")?,
        runs: row.try_get("runs")?,
        receptions: row.try_get("receptions")?,
        player_td_points: row.try_get("player_td_points")?,
        extra_point_1: row.try_get("extra_point_1")?,
        extra_point_2: row.try_get("extra_point_2")?,
        def_interceptions: row.try_get("def_interceptions")?,
        pick_six: row.try_get("pick_six")?,
        flag_pulls: row.try_get("flag_pulls")?,
        safeties: row.try_get("safeties")?,
        sacks: row.try_get("sacks")?,
        fumbles: row.try_get("fumbles")?,
        interceptions_thrown: row.try_get("interceptions_thrown")?,
        total_points: row.try_get("total_points")?,
        games_played: row.try_get("games_played")?,
    })
}

#[async_trait]
impl SeasonStatsRepository for SqliteSeasonStatsRepository {
    async fn upsert_batch(&self, rows: &[PlayerSeasonStats]) -> Result<()> {
        // One transaction for the whole batch: a session save is all-or-nothing.
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin season stats transaction")?;

        for row in rows {
            sqlx::query(
                r#"
                INSERT INTO player_season_stats (
                    player_id, team_id, season,
                    qb_completions, qb_touchdowns, qb_td_points,
                    runs, receptions, player_td_points,
                    extra_point_1, extra_point_2,
                    def_interceptions, pick_six, flag_pulls, safeties,
                    sacks, fumbles, interceptions_thrown,
                    total_points, games_played
                )
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(player_id, team_id, season) DO UPDATE SET
                    qb_completions = qb_completions + excluded.qb_completions,
                    qb_touchdowns = qb_touchdowns + excluded.qb_touchdowns,
                    qb_td_points = qb_td_points + excluded.qb_td_points,
                    runs = runs + excluded.runs,
                    receptions = receptions + excluded.receptions,
                    player_td_points = player_td_points + excluded.player_td_points,
                    extra_point_1 = extra_point_1 + excluded.extra_point_1,
                    extra_point_2 = extra_point_2 + excluded.extra_point_2,
                    def_interceptions = def_interceptions + excluded.def_interceptions,
                    pick_six = pick_six + excluded.pick_six,
                    flag_pulls = flag_pulls + excluded.flag_pulls,
                    safeties = safeties + excluded.safeties,
                    sacks = sacks + excluded.sacks,
                    fumbles = fumbles + excluded.fumbles,
                    interceptions_thrown = interceptions_thrown + excluded.interceptions_thrown,
                    total_points = total_points + excluded.total_points,
                    games_played = games_played + excluded.games_played
                "#,
            )
            .bind(&row.player_id)
            .bind(&row.team_id)
            .bind(&row.season)
            .bind(row.qb_completions)
            .bind(row.qb_touchdowns)
            .bind(row.qb_td_points)
            .bind(row.runs)
            .bind(row.receptions)
            .bind(row.player_td_points)
            .bind(row.extra_point_1)
            .bind(row.extra_point_2)
            .bind(row.def_interceptions)
            .bind(row.pick_six)
            .bind(row.flag_pulls)
            .bind(row.safeties)
            .bind(row.sacks)
            .bind(row.fumbles)
            .bind(row.interceptions_thrown)
            .bind(row.total_points)
            .bind(row.games_played)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to upsert season stats for {}", row.player_id))?;
        }

        tx.commit()
            .await
            .context("Failed to commit season stats batch")?;
        Ok(())
    }

    async fn season_totals(&self, team_id: &str, season: &str) -> Result<Vec<PlayerSeasonStats>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM player_season_stats
            WHERE team_id = ? AND season = ?
            ORDER BY total_points DESC, player_id ASC
            "#,
        )
        .bind(team_id)
        .bind(season)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load season totals")?;

        rows.iter().map(row_to_line).collect()
    }
}
