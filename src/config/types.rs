//! Typed runtime settings read from the process environment.

use std::time::Duration;

/// Value of `APP_ENV` that selects the production database engine.
pub const PRODUCTION: &str = "production";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CONNECT_ATTEMPTS: u32 = 5;
pub const DEFAULT_CONNECT_BACKOFF_MS: u64 = 500;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Environment tier. Anything other than `production` runs against a local SQLite file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Production,
    Development,
}

impl Tier {
    pub fn from_app_env(app_env: &str) -> Self {
        if app_env == PRODUCTION {
            Tier::Production
        } else {
            Tier::Development
        }
    }
}

/// Database fields are kept as raw strings; missing variables are empty and
/// surface as connection errors later.
#[derive(Clone, Debug)]
pub struct Settings {
    pub app_env: String,
    pub db_dsn_dev: String,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: String,
    pub db_name: String,
    pub port: u16,
    pub pool: PoolSettings,
    pub body_limit_bytes: usize,
}

/// Pool size and the retry policy used while the database is coming up.
#[derive(Clone, Debug)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub connect_attempts: u32,
    pub initial_backoff: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_attempts: DEFAULT_CONNECT_ATTEMPTS,
            initial_backoff: Duration::from_millis(DEFAULT_CONNECT_BACKOFF_MS),
        }
    }
}

impl Settings {
    pub fn tier(&self) -> Tier {
        Tier::from_app_env(&self.app_env)
    }
}
