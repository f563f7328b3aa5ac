use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only the listen port and log level have defaults; upstream services are optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Remote scope-analysis / suggestion service. Local rules are used when unset.
    pub analysis_upstream_url: Option<String>,
    /// Remote video-verification oracle. The placeholder oracle is used when unset.
    pub video_verifier_url: Option<String>,
    pub upstream_api_key: Option<String>,
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            analysis_upstream_url: optional(&lookup, "ANALYSIS_UPSTREAM_URL"),
            video_verifier_url: optional(&lookup, "VIDEO_VERIFIER_URL"),
            upstream_api_key: optional(&lookup, "UPSTREAM_API_KEY"),
            upstream_timeout_secs: lookup("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse::<u64>()
                .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

/// Treats blank values the same as missing ones.
fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
