//! Runtime configuration, read from the environment.
//!
//! `main` loads an optional `.env` file first, so every key below can also
//! live there. Unset or empty keys fall back to their defaults.

use std::path::PathBuf;

use thiserror::Error;

pub const HOST_KEY: &str = "ACTIVITIES_HOST";
pub const PORT_KEY: &str = "ACTIVITIES_PORT";
pub const STATIC_DIR_KEY: &str = "ACTIVITIES_STATIC_DIR";
pub const SEED_PATH_KEY: &str = "ACTIVITIES_SEED_PATH";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected a port number")]
    InvalidPort { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Replaces the embedded activity list when set.
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            seed_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match read(PORT_KEY) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    key: PORT_KEY,
                    value,
                })?,
            None => defaults.port,
        };

        Ok(Self {
            host: read(HOST_KEY).unwrap_or(defaults.host),
            port,
            static_dir: read(STATIC_DIR_KEY)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_path: read(SEED_PATH_KEY).map(PathBuf::from),
        })
    }
}
