//! Product handlers: create, list, read.

use crate::error::AppError;
use crate::extractors::{JsonBody, ResourceId};
use crate::models::{NewProduct, Product};
use crate::service::ProductService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list(&state.pool).await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewProduct>,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::create(&state.pool, &body).await?;
    tracing::info!(id = product.id, "product created");
    Ok(Json(product))
}

pub async fn get_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Product>, AppError> {
    ProductService::get(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("product not found".into()))
}
