use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Every variable is optional; a missing API key only disables the relay widgets.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    /// Upstream request timeout. Unset means a call may wait indefinitely.
    pub llm_timeout_secs: Option<u64>,
    pub profile_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            llm_timeout_secs: optional_env("LLM_TIMEOUT_SECS")
                .map(|v| parse_timeout(&v))
                .transpose()?,
            profile_path: optional_env("PROFILE_PATH").map(PathBuf::from),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .context("LLM_TIMEOUT_SECS must be a whole number of seconds")
}

/// Reads an environment variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            llm_timeout_secs: None,
            profile_path: None,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
