//! Order handlers. Reads return the order with its user and product.

use crate::error::AppError;
use crate::extractors::{JsonBody, ResourceId};
use crate::models::{NewOrder, Order};
use crate::service::OrderService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    Ok(Json(OrderService::list(&state.pool).await?))
}

pub async fn get_order(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Order>, AppError> {
    OrderService::get(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("order not found".into()))
}

pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewOrder>,
) -> Result<Json<Order>, AppError> {
    let order = OrderService::create(&state.pool, &body).await?;
    tracing::info!(id = order.id, user_id = order.user_id, product_id = order.product_id, "order created");
    Ok(Json(order))
}
