use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "https://gemcraft.vercel.app"];
const DEFAULT_CHROME_BIN: &str = "chromium";
const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub cors_origins: Vec<String>,
    pub chrome_bin: String,
    pub render_timeout: Duration,
    pub max_upload_bytes: usize,
    /// Optional replacement for the built-in resume shell.
    pub shell_template_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let var = |key: &str| std::env::var(key).ok();

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            cors_origins: parse_origins(var("CORS_ORIGINS")),
            chrome_bin: var("CHROME_BIN").unwrap_or_else(|| DEFAULT_CHROME_BIN.to_string()),
            render_timeout: Duration::from_secs(parse_or(
                "RENDER_TIMEOUT_SECS",
                var("RENDER_TIMEOUT_SECS"),
                DEFAULT_RENDER_TIMEOUT_SECS,
            )?),
            max_upload_bytes: parse_or(
                "MAX_UPLOAD_BYTES",
                var("MAX_UPLOAD_BYTES"),
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            shell_template_path: var("SHELL_TEMPLATE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

/// Comma-separated origin list; blank entries are dropped. Unset means the defaults.
fn parse_origins(value: Option<String>) -> Vec<String> {
    match value {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
    }
}
