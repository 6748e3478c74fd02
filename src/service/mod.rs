//! Persistence services: one per entity, each a thin set of statements against the shared pool.

pub mod order;
pub mod password;
pub mod product;
pub mod user;

pub use order::OrderService;
pub use password::{hash_password, verify_password};
pub use product::ProductService;
pub use user::UserService;

use crate::error::AppError;
use sqlx::any::AnyQueryResult;

/// Auto-increment id reported by the driver for the row just inserted.
pub(crate) fn inserted_id(result: &AnyQueryResult) -> Result<i64, AppError> {
    result
        .last_insert_id()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Internal("database did not report an inserted id".into()))
}
