use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Unset means the in-memory store: data lasts as long as the process.
    pub redis_url: Option<String>,
    pub store_key_prefix: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            store_key_prefix: std::env::var("STORE_KEY_PREFIX")
                .unwrap_or_else(|_| "cvbuilder".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            redis_url: None,
            store_key_prefix: "cvbuilder".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads `key`, treating an empty value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
