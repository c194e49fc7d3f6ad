// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    database_url: String,
    max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite::memory:".into()
}

// An in-memory database lives in a single connection.
const fn default_max_connections() -> u32 {
    1
}

fn parse_max_connections(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            ConfigError::Invalid(format!(
                "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
            ))
        })
}

impl StoreConfig {
    #[must_use]
    pub fn new(database_url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections,
        }
    }

    /// Build configuration from environment variables, loading `.env` first when present.
    ///
    /// # Errors
    ///
    /// See [`StoreConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] for a blank `DATABASE_URL` and [`ConfigError::Invalid`]
    /// when `DATABASE_MAX_CONNECTIONS` is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .map(|raw| parse_max_connections(&raw))
            .transpose()?
            .unwrap_or_else(default_max_connections);

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    #[must_use]
    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(default_database_url(), default_max_connections())
    }
}
