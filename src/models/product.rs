use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /products`. Absent fields take their zero value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    /// Decode from columns named `{prefix}id`, `{prefix}name`, ...
    pub(crate) fn from_prefixed(row: &AnyRow, prefix: &str) -> Result<Self, sqlx::Error> {
        let col = |name: &str| format!("{}{}", prefix, name);
        Ok(Product {
            id: row.try_get(col("id").as_str())?,
            name: row.try_get(col("name").as_str())?,
            description: row.try_get(col("description").as_str())?,
            price: row.try_get(col("price").as_str())?,
            stock: row.try_get(col("stock").as_str())?,
            created_at: super::timestamp(row, &col("created_at"))?,
            updated_at: super::timestamp(row, &col("updated_at"))?,
        })
    }
}

impl<'r> FromRow<'r, AnyRow> for Product {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Self::from_prefixed(row, "")
    }
}
