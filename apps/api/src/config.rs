use anyhow::{bail, Context, Result};

use crate::screening::ScoringPolicy;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_API_VERSION: &str = "v1beta";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Read once at startup and treated as read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Missing key does not stop the server; every chat request falls back instead.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_version: String,
    pub gemini_base_url: String,
    pub provider_timeout_secs: u64,
    pub scoring_policy: ScoringPolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_version: optional_env("GEMINI_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            provider_timeout_secs: std::env::var("PROVIDER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "20".to_string())
                .parse::<u64>()
                .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?,
            scoring_policy: parse_policy(
                &std::env::var("SCORING_POLICY").unwrap_or_else(|_| "trigger_weighted".to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn provider_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_policy(raw: &str) -> Result<ScoringPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trigger_weighted" | "trigger" => Ok(ScoringPolicy::TriggerWeighted),
        "raw_sum" | "sum" => Ok(ScoringPolicy::RawSum),
        other => bail!("SCORING_POLICY '{other}' is not one of: trigger_weighted, raw_sum"),
    }
}

#[cfg(test)]
impl Config {
    /// Defaults used by handler tests; no environment access.
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: Some("test-key".to_string()),
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_api_version: DEFAULT_API_VERSION.to_string(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            provider_timeout_secs: 20,
            scoring_policy: ScoringPolicy::TriggerWeighted,
            port: 3000,
            rust_log: "info".to_string(),
        }
    }
}
