//! Product statements.

use crate::error::AppError;
use crate::models::{now_text, NewProduct, Product};
use sqlx::AnyPool;

const SELECT_PRODUCTS: &str =
    "SELECT id, name, description, price, stock, created_at, updated_at FROM products";

pub struct ProductService;

impl ProductService {
    /// Insert one product and return it as stored.
    pub async fn create(pool: &AnyPool, new: &NewProduct) -> Result<Product, AppError> {
        let now = now_text();
        let sql = "INSERT INTO products (name, description, price, stock, created_at, updated_at) \
                   VALUES (?, ?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, name = %new.name, "query");
        let result = sqlx::query(sql)
            .bind(new.name.as_str())
            .bind(new.description.as_str())
            .bind(new.price)
            .bind(new.stock)
            .bind(now.as_str())
            .bind(now.as_str())
            .execute(pool)
            .await?;
        let id = super::inserted_id(&result)?;
        Self::get(pool, id)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    /// All products ordered by id. Unbounded.
    pub async fn list(pool: &AnyPool) -> Result<Vec<Product>, AppError> {
        let sql = format!("{} ORDER BY id", SELECT_PRODUCTS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn get(pool: &AnyPool, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("{} WHERE id = ?", SELECT_PRODUCTS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn exists(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT id FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }
}
