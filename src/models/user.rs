use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use std::fmt;

/// A registered user. The password is only ever held as an argon2 PHC string and never serialized.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /users`.
#[derive(Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl User {
    pub(crate) fn from_prefixed(row: &AnyRow, prefix: &str) -> Result<Self, sqlx::Error> {
        let col = |name: &str| format!("{}{}", prefix, name);
        Ok(User {
            id: row.try_get(col("id").as_str())?,
            name: row.try_get(col("name").as_str())?,
            email: row.try_get(col("email").as_str())?,
            password_hash: row.try_get(col("password_hash").as_str())?,
            created_at: super::timestamp(row, &col("created_at"))?,
            updated_at: super::timestamp(row, &col("updated_at"))?,
        })
    }
}

impl<'r> FromRow<'r, AnyRow> for User {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Self::from_prefixed(row, "")
    }
}
