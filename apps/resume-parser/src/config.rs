use std::path::PathBuf;

use anyhow::{Context, Result};

/// Value shipped in sample `.env` files; treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_OPENAI_API_KEY";

pub const DEFAULT_PROMPT_CHAR_LIMIT: usize = 4000;

/// Batch run configuration loaded from environment variables.
/// Only malformed numeric values are errors; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub archive_path: PathBuf,
    pub output_path: PathBuf,
    /// `None` means the extraction service is unconfigured and every record
    /// keeps its default (null) fields.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub llm_timeout_secs: u64,
    pub llm_max_retries: u32,
    /// First backoff delay; doubles on each further retry.
    pub llm_retry_base_ms: u64,
    pub prompt_char_limit: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            archive_path: PathBuf::from("R-data.zip"),
            output_path: PathBuf::from("parsed_resumes.csv"),
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-3.5-turbo".to_string(),
            llm_timeout_secs: 120,
            llm_max_retries: 0,
            llm_retry_base_ms: 1000,
            prompt_char_limit: DEFAULT_PROMPT_CHAR_LIMIT,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            archive_path: lookup("ARCHIVE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.archive_path),
            output_path: lookup("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            openai_api_key: lookup("OPENAI_API_KEY").and_then(normalize_api_key),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.openai_base_url),
            openai_model: lookup("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            llm_timeout_secs: parse_or(&lookup, "LLM_TIMEOUT_SECS", defaults.llm_timeout_secs)?,
            llm_max_retries: parse_or(&lookup, "LLM_MAX_RETRIES", defaults.llm_max_retries)?,
            llm_retry_base_ms: parse_or(
                &lookup,
                "LLM_RETRY_BASE_MS",
                defaults.llm_retry_base_ms,
            )?,
            prompt_char_limit: parse_or(
                &lookup,
                "PROMPT_CHAR_LIMIT",
                defaults.prompt_char_limit,
            )?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn normalize_api_key(raw: String) -> Option<String> {
    let key = raw.trim();
    if key.is_empty() || key == PLACEHOLDER_API_KEY {
        None
    } else {
        Some(key.to_string())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
