//! User statements. Passwords are hashed before they reach the database.

use crate::error::AppError;
use crate::models::{now_text, NewUser, User};
use crate::service::password::hash_password;
use sqlx::AnyPool;

const SELECT_USERS: &str =
    "SELECT id, name, email, password_hash, created_at, updated_at FROM users";

pub struct UserService;

impl UserService {
    /// Insert one user. Duplicate emails are a conflict.
    pub async fn create(pool: &AnyPool, new: &NewUser) -> Result<User, AppError> {
        if Self::find_by_email(pool, &new.email).await?.is_some() {
            return Err(AppError::Conflict(format!("email '{}' is already registered", new.email)));
        }
        // argon2 is deliberately slow; keep it off the async workers.
        let password = new.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("password hashing task failed: {}", e)))??;

        let now = now_text();
        let sql = "INSERT INTO users (name, email, password_hash, created_at, updated_at) VALUES (?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, email = %new.email, "query");
        let result = sqlx::query(sql)
            .bind(new.name.as_str())
            .bind(new.email.as_str())
            .bind(password_hash.as_str())
            .bind(now.as_str())
            .bind(now.as_str())
            .execute(pool)
            .await?;
        let id = super::inserted_id(&result)?;
        Self::get(pool, id)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    pub async fn list(pool: &AnyPool) -> Result<Vec<User>, AppError> {
        let sql = format!("{} ORDER BY id", SELECT_USERS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?)
    }

    pub async fn get(pool: &AnyPool, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("{} WHERE id = ?", SELECT_USERS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn find_by_email(pool: &AnyPool, email: &str) -> Result<Option<User>, AppError> {
        let sql = format!("{} WHERE email = ?", SELECT_USERS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn exists(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT id FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }
}
