use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Artificial delay before canned bullet suggestions are returned.
    pub suggestion_delay: Duration,
    /// Artificial delay before a canned summary is returned.
    pub summary_delay: Duration,
    pub cors_permissive: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            port: var_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var_or("RUST_LOG", "info"),
            suggestion_delay: millis(&var_or("SUGGESTION_DELAY_MS", "2000"))
                .context("SUGGESTION_DELAY_MS must be a whole number of milliseconds")?,
            summary_delay: millis(&var_or("SUMMARY_DELAY_MS", "1500"))
                .context("SUMMARY_DELAY_MS must be a whole number of milliseconds")?,
            cors_permissive: var_or("CORS_PERMISSIVE", "true")
                .parse::<bool>()
                .context("CORS_PERMISSIVE must be 'true' or 'false'")?,
        })
    }
}

fn millis(raw: &str) -> Result<Duration, std::num::ParseIntError> {
    raw.parse::<u64>().map(Duration::from_millis)
}
