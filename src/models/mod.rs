//! Entity records and the request bodies that create them.

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrder, Order};
pub use product::{NewProduct, Product};
pub use user::{NewUser, User};

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::any::AnyRow;
use sqlx::Row;

/// Timestamps are stored as RFC 3339 text so both backends round-trip them through the `Any` driver.
pub fn now_text() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn timestamp(row: &AnyRow, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}

/// Id of a left-joined row; `None` when the join found nothing.
pub(crate) fn joined_id(row: &AnyRow, prefix: &str) -> Result<Option<i64>, sqlx::Error> {
    row.try_get::<Option<i64>, _>(format!("{}id", prefix).as_str())
}
