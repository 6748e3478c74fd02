use crate::handlers::{create_order, get_order, list_orders};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn order_routes(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/:id", get(get_order))
        .with_state(state)
}
