use super::{joined_id, Product, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

/// Column prefixes used by the eager-loading join in the order queries.
pub const USER_PREFIX: &str = "u_";
pub const PRODUCT_PREFIX: &str = "p_";

/// An order with its user and product loaded alongside.
/// `status` is free text chosen by the client at creation; it never transitions.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<User>,
    pub product: Option<Product>,
}

/// Body of `POST /orders`. Absent fields take their zero value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewOrder {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub status: String,
}

impl<'r> FromRow<'r, AnyRow> for Order {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        let user = match joined_id(row, USER_PREFIX)? {
            Some(_) => Some(User::from_prefixed(row, USER_PREFIX)?),
            None => None,
        };
        let product = match joined_id(row, PRODUCT_PREFIX)? {
            Some(_) => Some(Product::from_prefixed(row, PRODUCT_PREFIX)?),
            None => None,
        };
        Ok(Order {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            product_id: row.try_get("product_id")?,
            quantity: row.try_get("quantity")?,
            status: row.try_get("status")?,
            created_at: super::timestamp(row, "created_at")?,
            updated_at: super::timestamp(row, "updated_at")?,
            user,
            product,
        })
    }
}
