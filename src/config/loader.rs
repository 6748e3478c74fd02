//! Load settings from environment variables (optionally seeded from a `.env` file).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

impl Settings {
    /// Read `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(_) => tracing::debug!("no .env file found, using process environment"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset database keys become empty strings.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str| lookup(key).unwrap_or_default();

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let pool = PoolSettings {
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            connect_attempts: parse_or(&lookup, "DB_CONNECT_ATTEMPTS", DEFAULT_CONNECT_ATTEMPTS)?.max(1),
            initial_backoff: Duration::from_millis(parse_or(
                &lookup,
                "DB_CONNECT_BACKOFF_MS",
                DEFAULT_CONNECT_BACKOFF_MS,
            )?),
        };
        let body_limit_bytes = parse_or(&lookup, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?;

        Ok(Settings {
            app_env: text("APP_ENV"),
            db_dsn_dev: text("DB_DSN_DEV"),
            db_user: text("DB_USER"),
            db_password: text("DB_PASSWORD"),
            db_host: text("DB_HOST"),
            db_port: text("DB_PORT"),
            db_name: text("DB_NAME"),
            port,
            pool,
            body_limit_bytes,
        })
    }
}

/// Empty or unset means "use the default"; anything else must parse.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw,
            reason: e.to_string(),
        }),
        _ => Ok(default),
    }
}
