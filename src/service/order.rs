//! Order statements. Reads join the owning user and the ordered product.

use crate::error::AppError;
use crate::models::{now_text, NewOrder, Order};
use crate::service::{ProductService, UserService};
use sqlx::AnyPool;

/// Order columns plus the user and product columns under the prefixes `Order::from_row` expects.
const SELECT_ORDERS: &str = "SELECT o.id, o.user_id, o.product_id, o.quantity, o.status, \
     o.created_at, o.updated_at, \
     u.id AS u_id, u.name AS u_name, u.email AS u_email, u.password_hash AS u_password_hash, \
     u.created_at AS u_created_at, u.updated_at AS u_updated_at, \
     p.id AS p_id, p.name AS p_name, p.description AS p_description, p.price AS p_price, \
     p.stock AS p_stock, p.created_at AS p_created_at, p.updated_at AS p_updated_at \
     FROM orders o \
     LEFT JOIN users u ON u.id = o.user_id \
     LEFT JOIN products p ON p.id = o.product_id";

pub struct OrderService;

impl OrderService {
    /// Insert one order after checking that its user and product exist. Stock is left untouched.
    pub async fn create(pool: &AnyPool, new: &NewOrder) -> Result<Order, AppError> {
        if !UserService::exists(pool, new.user_id).await? {
            return Err(AppError::Validation(format!("user {} does not exist", new.user_id)));
        }
        if !ProductService::exists(pool, new.product_id).await? {
            return Err(AppError::Validation(format!("product {} does not exist", new.product_id)));
        }

        let now = now_text();
        let sql = "INSERT INTO orders (user_id, product_id, quantity, status, created_at, updated_at) \
                   VALUES (?, ?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, user_id = new.user_id, product_id = new.product_id, "query");
        let result = sqlx::query(sql)
            .bind(new.user_id)
            .bind(new.product_id)
            .bind(new.quantity)
            .bind(new.status.as_str())
            .bind(now.as_str())
            .bind(now.as_str())
            .execute(pool)
            .await?;
        let id = super::inserted_id(&result)?;
        Self::get(pool, id)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    /// All orders with user and product loaded. Unbounded.
    pub async fn list(pool: &AnyPool) -> Result<Vec<Order>, AppError> {
        let sql = format!("{} ORDER BY o.id", SELECT_ORDERS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?)
    }

    pub async fn get(pool: &AnyPool, id: i64) -> Result<Option<Order>, AppError> {
        let sql = format!("{} WHERE o.id = ?", SELECT_ORDERS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }
}
