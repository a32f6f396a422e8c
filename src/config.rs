//! Runtime configuration, read from the environment (and a `.env` file when
//! one is present).

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 8;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{key} has an invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    /// Pool size; `None` keeps the driver's default.
    pub max_connections: Option<u32>,
    pub connect_timeout: Duration,
    /// Log every SQL statement through SeaORM's own logging.
    pub sql_logging: bool,
    /// `EnvFilter` directives for the tracing subscriber.
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .map(|value| parse("DATABASE_MAX_CONNECTIONS", value))
            .transpose()?;

        let connect_timeout = lookup("DATABASE_CONNECT_TIMEOUT_SECS")
            .map(|value| parse("DATABASE_CONNECT_TIMEOUT_SECS", value))
            .transpose()?
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        let sql_logging = lookup("DATABASE_SQL_LOGGING")
            .map(|value| parse_flag("DATABASE_SQL_LOGGING", value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            database_url,
            max_connections,
            connect_timeout: Duration::from_secs(connect_timeout),
            sql_logging,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
        })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.database_url.clone());
        if let Some(max) = self.max_connections {
            opt.max_connections(max);
        }
        opt.connect_timeout(self.connect_timeout)
            .sqlx_logging(self.sql_logging);
        opt
    }

    pub async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        Database::connect(self.connect_options()).await
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
