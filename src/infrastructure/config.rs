//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Where documents are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            other => anyhow::bail!("Unsupported store backend: {}", other),
        }
    }
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Document store backend (`STORE_BACKEND`)
    pub store_backend: StoreBackend,
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP / WebSocket server port
    pub server_port: u16,
    /// Buffered change notifications per store before slow listeners lag
    pub room_data_channel_capacity: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            store_backend: env::var("STORE_BACKEND")
                .unwrap_or_else(|_| "sqlite".to_string())
                .parse()
                .context("STORE_BACKEND must be 'memory' or 'sqlite'")?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:rooper.db?mode=rwc".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            room_data_channel_capacity: env::var("ROOM_DATA_CHANNEL_CAPACITY")
                .unwrap_or_else(|_| "64".to_string())
                .parse()
                .context("ROOM_DATA_CHANNEL_CAPACITY must be a positive integer")?,
        })
    }

    /// In-memory configuration for tests
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            store_backend: StoreBackend::Memory,
            database_url: String::new(),
            server_port: 0,
            room_data_channel_capacity: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_names() {
        assert_eq!("memory".parse::<StoreBackend>().expect("memory"), StoreBackend::Memory);
        assert_eq!("SQLite".parse::<StoreBackend>().expect("sqlite"), StoreBackend::Sqlite);
        assert!("neo4j".parse::<StoreBackend>().is_err());
    }
}
