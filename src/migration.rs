//! Versioned schema migrations, one script per dialect.
//! Applied versions are recorded in `schema_migrations`, so running on every start only applies what is new.

use crate::error::StoreError;
use crate::models::now_text;
use crate::store::Backend;
use sqlx::{AnyPool, Row};
use std::collections::HashSet;

pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub sqlite: &'static str,
    pub mysql: &'static str,
}

impl Migration {
    pub fn sql(&self, backend: Backend) -> &'static str {
        match backend {
            Backend::Sqlite => self.sqlite,
            Backend::MySql => self.mysql,
        }
    }
}

/// Ordered by version. Never edit an entry once released; append a new one.
/// Scripts are `IF NOT EXISTS`: MySQL commits DDL implicitly, so a table can exist without its ledger row.
/// MySQL string columns must be `VARCHAR`; the `Any` driver decodes `TEXT`/`BLOB` as bytes.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_users",
        sqlite: r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )"#,
        mysql: r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL UNIQUE,
                password_hash VARCHAR(255) NOT NULL,
                created_at VARCHAR(64) NOT NULL,
                updated_at VARCHAR(64) NOT NULL
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"#,
    },
    Migration {
        version: 2,
        name: "create_products",
        sqlite: r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL NOT NULL,
                stock INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )"#,
        mysql: r#"
            CREATE TABLE IF NOT EXISTS products (
                id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                description VARCHAR(4096) NOT NULL,
                price DOUBLE NOT NULL,
                stock BIGINT NOT NULL,
                created_at VARCHAR(64) NOT NULL,
                updated_at VARCHAR(64) NOT NULL
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"#,
    },
    Migration {
        version: 3,
        name: "create_orders",
        sqlite: r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users (id),
                product_id INTEGER NOT NULL REFERENCES products (id),
                quantity INTEGER NOT NULL,
                status TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )"#,
        mysql: r#"
            CREATE TABLE IF NOT EXISTS orders (
                id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
                user_id BIGINT NOT NULL,
                product_id BIGINT NOT NULL,
                quantity BIGINT NOT NULL,
                status VARCHAR(255) NOT NULL,
                created_at VARCHAR(64) NOT NULL,
                updated_at VARCHAR(64) NOT NULL,
                CONSTRAINT fk_orders_user FOREIGN KEY (user_id) REFERENCES users (id),
                CONSTRAINT fk_orders_product FOREIGN KEY (product_id) REFERENCES products (id)
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"#,
    },
];

const CREATE_LEDGER: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version BIGINT NOT NULL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    applied_at VARCHAR(64) NOT NULL
)";

/// Versions already recorded in `schema_migrations`.
pub async fn applied_versions(pool: &AnyPool) -> Result<HashSet<i64>, StoreError> {
    let rows = sqlx::query("SELECT version FROM schema_migrations")
        .fetch_all(pool)
        .await?;
    rows.iter()
        .map(|r| r.try_get::<i64, _>("version").map_err(StoreError::from))
        .collect()
}

/// Create the ledger if needed, then apply every pending migration in version order.
/// Returns the versions applied by this call.
pub async fn apply_migrations(pool: &AnyPool, backend: Backend) -> Result<Vec<i64>, StoreError> {
    sqlx::query(CREATE_LEDGER).execute(pool).await?;
    let done = applied_versions(pool).await?;

    let mut applied = Vec::new();
    for m in MIGRATIONS.iter().filter(|m| !done.contains(&m.version)) {
        let wrap = |source| StoreError::Migration {
            version: m.version,
            name: m.name,
            source,
        };
        tracing::debug!(version = m.version, sql = %m.sql(backend), "migration");
        let mut tx = pool.begin().await.map_err(wrap)?;
        sqlx::query(m.sql(backend)).execute(&mut *tx).await.map_err(wrap)?;
        sqlx::query("INSERT INTO schema_migrations (version, name, applied_at) VALUES (?, ?, ?)")
            .bind(m.version)
            .bind(m.name)
            .bind(now_text())
            .execute(&mut *tx)
            .await
            .map_err(wrap)?;
        tx.commit().await.map_err(wrap)?;
        tracing::info!(version = m.version, name = m.name, "applied migration");
        applied.push(m.version);
    }
    if applied.is_empty() {
        tracing::info!("schema up to date");
    }
    Ok(applied)
}
