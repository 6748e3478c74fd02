//! Shared application state for all routes.

use crate::store::Backend;
use sqlx::AnyPool;

/// Constructed once at startup and handed to every handler through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub backend: Backend,
}

impl AppState {
    pub fn new(pool: AnyPool, backend: Backend) -> Self {
        Self { pool, backend }
    }
}
