use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Origins the frontend is served from.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "https://ai-marketing1.vercel.app",
    "https://ai-marketing1-git-main-xiaotaonotrouble.vercel.app",
    "https://ai-marketing1-xiaotaonotrouble.vercel.app",
];

const DEFAULT_PORT: u16 = 8000;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub deepseek_api_key: String,
    pub additional_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let deepseek_api_key = lookup("DEEPSEEK_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .context("DEEPSEEK_API_KEY must be set")?;

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .context("PORT must be a valid number")?,
            None => DEFAULT_PORT,
        };

        let additional_allowed_origins = lookup("ADDITIONAL_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        Ok(Self {
            port,
            deepseek_api_key,
            additional_allowed_origins,
        })
    }

    /// Default origins followed by the configured extras, without duplicates.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = Vec::new();
        let all = DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|s| s.to_string())
            .chain(self.additional_allowed_origins.iter().cloned());

        for origin in all {
            if !origins.contains(&origin) {
                origins.push(origin);
            }
        }
        origins
    }
}
