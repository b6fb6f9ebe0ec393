use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_file: PathBuf,
    pub scan_interval_hours: i64,
    pub discord_webhook_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            data_file: env::var("DATA_FILE")
                .unwrap_or_else(|_| "jobs_data.json".to_string())
                .into(),
            scan_interval_hours: env::var("SCAN_INTERVAL_HOURS")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .context("SCAN_INTERVAL_HOURS must be a valid number")?,
            discord_webhook_url: env::var("DISCORD_WEBHOOK_URL")
                .ok()
                .filter(|url| !url.is_empty()),
        })
    }
}
