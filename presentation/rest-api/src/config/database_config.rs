use std::env;

use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::error::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Load database settings from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - DATABASE_MIGRATIONS_PATH: Migration directory
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVariable("DATABASE_URL"))?;
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS").ok();
        let migrations_path = env::var("DATABASE_MIGRATIONS_PATH")
            .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections: parse_max_connections(max_connections.as_deref())?,
            migrations_path,
        })
    }
}

fn parse_max_connections(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_MAX_CONNECTIONS);
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            name: "DATABASE_MAX_CONNECTIONS",
            value: raw.to_string(),
        }),
    }
}

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config)
        .await
        .context("failed to connect to the database")?;
    run_migrations(&pool, &settings.migrations_path)
        .await
        .with_context(|| format!("failed to run migrations from {}", settings.migrations_path))?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_max_connections_when_unset() {
        assert_eq!(parse_max_connections(None), Ok(DEFAULT_MAX_CONNECTIONS));
    }

    #[test]
    fn should_parse_max_connections() {
        assert_eq!(parse_max_connections(Some("12")), Ok(12));
    }

    #[test]
    fn should_reject_zero_or_garbage_max_connections() {
        assert!(parse_max_connections(Some("0")).is_err());
        assert!(parse_max_connections(Some("many")).is_err());
    }
}
