// Runtime configuration read from the environment.
//
// Variables
// - TIMER_BIND_ADDR      socket address to listen on, default 0.0.0.0:8080
// - TIMER_DATABASE_PATH  SQLite file; in-memory stores when unset
// - TIMER_SEED_FILE      JSON file with users and tasks to seed at startup

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    InMemory,
    Sqlite { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageConfig,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = read("TIMER_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "TIMER_BIND_ADDR",
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        let storage = match read("TIMER_DATABASE_PATH") {
            Some(path) => StorageConfig::Sqlite {
                path: PathBuf::from(path.trim()),
            },
            None => StorageConfig::InMemory,
        };

        Ok(Self {
            bind_addr,
            storage,
            seed_file: read("TIMER_SEED_FILE").map(|p| PathBuf::from(p.trim())),
        })
    }
}
