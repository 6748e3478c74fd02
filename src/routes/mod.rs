//! Route tables and the assembled application router.

pub mod common;
pub mod order;
pub mod product;
pub mod user;

pub use common::common_routes;
pub use order::order_routes;
pub use product::product_routes;
pub use user::user_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full service: entity routes, then health/readiness/version, with tracing and a body size cap.
/// `body_limit_bytes` replaces axum's own extractor limit as well, so it can be raised above 2 MiB.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(product_routes(state.clone()))
        .merge(order_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(common_routes(state))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
