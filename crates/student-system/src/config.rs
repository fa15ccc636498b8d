use std::collections::HashMap;
use thiserror::Error;

/// Environment variable holding the database connection string
pub const DATABASE_URL: &str = "DATABASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    /// Reads the configuration from the environment, after loading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let raw_url = env_map
            .get(DATABASE_URL)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEnv(DATABASE_URL.to_string()))?;

        Ok(Config {
            database_url: normalize_database_url(raw_url)?,
        })
    }
}

/// Accepts postgres and sqlite URLs, and turns bare `.db`/`.sqlite` paths into sqlite URLs
fn normalize_database_url(url: &str) -> Result<String, ConfigError> {
    if url.starts_with("postgres://")
        || url.starts_with("postgresql://")
        || url.starts_with("sqlite:")
    {
        Ok(url.to_string())
    } else if url.ends_with(".db") || url.ends_with(".sqlite") {
        Ok(format!("sqlite://{url}?mode=rwc"))
    } else {
        Err(ConfigError::InvalidValue(
            DATABASE_URL.to_string(),
            format!("unsupported database url {url}, expected postgres://, sqlite: or a .db path"),
        ))
    }
}
