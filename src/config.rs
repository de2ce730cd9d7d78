use anyhow::{Context, Result};
use dotenvy::dotenv;
use reqwest::Url;
use std::env;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    /// Root of the scheduling server, always ending in `/`
    pub base_url: Url,

    // Rolling log file
    pub log_dir: String,
    pub log_file: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, `from_env` passes the process environment.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = var("VACATION_BASE_URL")
            .unwrap_or_else(|| "http://127.0.0.1:5000/".to_string());
        let log_level = var("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            base_url: parse_base_url(&base_url)?,
            log_dir: var("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_file: var("LOG_FILE").unwrap_or_else(|| "vacation.log".to_string()),
            log_level: log_level
                .parse()
                .with_context(|| format!("LOG_LEVEL `{}` is not a tracing level", log_level))?,
        })
    }
}

/// Endpoint paths are joined relative to the base, so it must end in `/`.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).with_context(|| format!("VACATION_BASE_URL `{}` is not a valid url", raw))
}
