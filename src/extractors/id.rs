//! Primary-key path parameter (`/:id`).

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// A positive integer id taken from the single path parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceId(pub i64);

impl ResourceId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(ResourceId(id)),
            _ => Err(AppError::BadRequest(format!("invalid id '{}'", raw))),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Self::parse(&raw)
    }
}
