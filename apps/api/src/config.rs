use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file replacing the built-in knowledge base.
    pub knowledge_base_path: Option<PathBuf>,
    /// Fixed seed for question shuffling. Unset means system randomness.
    pub question_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            knowledge_base_path: None,
            question_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            knowledge_base_path: optional_env("KNOWLEDGE_BASE_PATH").map(PathBuf::from),
            question_seed: optional_env("QUESTION_SEED")
                .map(|raw| raw.parse::<u64>())
                .transpose()
                .context("QUESTION_SEED must be an unsigned integer")?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
