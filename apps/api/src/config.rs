use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a development default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding the static frontend (index.html, styles, scripts).
    pub static_dir: String,
    /// When set, analysis is delegated to this remote endpoint instead of
    /// the built-in similarity engine.
    pub analysis_api_url: Option<String>,
    /// Extra allowed CORS origin for a separately hosted frontend.
    pub frontend_url: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "assets".to_string()),
            analysis_api_url: optional_env("ANALYSIS_API_URL"),
            frontend_url: optional_env("FRONTEND_URL"),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
