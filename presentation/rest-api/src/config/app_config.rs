use std::env;
use std::str::FromStr;

use poem::middleware::Cors;

use super::database_config::DatabaseSettings;
use super::error::ConfigError;
use super::{cors_config, server_config::ServerConfig};

/// Where products are stored.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Postgres(DatabaseSettings),
    /// Process-local store, seeded with a few users and categories.
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageKind::Postgres),
            "memory" | "in-memory" => Ok(StorageKind::Memory),
            _ => Err(ConfigError::InvalidValue {
                name: "STORAGE_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

impl StorageBackend {
    /// Environment variables:
    /// - STORAGE_BACKEND: "postgres" or "memory" (default: "postgres")
    /// - DATABASE_*: see [`DatabaseSettings::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let kind = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageKind::Postgres,
        };

        match kind {
            StorageKind::Postgres => Ok(StorageBackend::Postgres(DatabaseSettings::from_env()?)),
            StorageKind::Memory => Ok(StorageBackend::Memory),
        }
    }
}

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageBackend,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            storage: StorageBackend::from_env()?,
        })
    }
}
