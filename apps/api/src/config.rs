use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Absent key is not fatal: recommendations are served with a fallback insight.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub static_dir: PathBuf,
    pub insight_timeout: Duration,
    pub upstream_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            supabase_url: require_env("SUPABASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            supabase_anon_key: require_env("SUPABASE_ANON_KEY")?,
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            static_dir: optional_env("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("frontend")),
            insight_timeout: Duration::from_secs(parse_secs("INSIGHT_TIMEOUT_SECS", 20)?),
            upstream_timeout: Duration::from_secs(parse_secs("UPSTREAM_TIMEOUT_SECS", 15)?),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads a variable, trimming whitespace; blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_secs(key: &str, default: u64) -> Result<u64> {
    match optional_env(key) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of seconds")),
        None => Ok(default),
    }
}
