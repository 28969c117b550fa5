use anyhow::{Context, Result};

use crate::models::options::DEFAULT_SKILL_CATALOG;

/// Application configuration loaded from environment variables.
/// Every variable is optional; unparseable values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Skills the form offers. Requests naming other skills are rejected.
    pub skill_catalog: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            skill_catalog: default_skill_catalog(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: match std::env::var("PORT") {
                Ok(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                Err(_) => defaults.port,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            skill_catalog: std::env::var("SKILL_CATALOG")
                .map(|raw| parse_skill_catalog(&raw))
                .unwrap_or(defaults.skill_catalog),
        })
    }
}

fn default_skill_catalog() -> Vec<String> {
    DEFAULT_SKILL_CATALOG.iter().map(|s| s.to_string()).collect()
}

/// Splits a comma-separated catalog. Blank entries are dropped; an empty
/// result falls back to the default catalog.
fn parse_skill_catalog(raw: &str) -> Vec<String> {
    let skills: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if skills.is_empty() {
        default_skill_catalog()
    } else {
        skills
    }
}
