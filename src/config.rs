use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub team_id: String,
    pub season: String,
    pub huddle_page_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/sideline.db".to_string());

        let team_id = env::var("TEAM_ID").unwrap_or_else(|_| "default".to_string());

        let season = env::var("SEASON").unwrap_or_else(|_| "2025-fall".to_string());

        let huddle_page_size = env::var("HUDDLE_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<usize>()
            .context("Failed to parse HUDDLE_PAGE_SIZE")?;

        Ok(Self {
            database_url,
            team_id,
            season,
            huddle_page_size,
        })
    }
}
