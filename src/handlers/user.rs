//! User handlers. Responses never include password material.

use crate::error::AppError;
use crate::extractors::{JsonBody, ResourceId};
use crate::models::{NewUser, User};
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(UserService::list(&state.pool).await?))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<Json<User>, AppError> {
    let user = UserService::create(&state.pool, &body).await?;
    tracing::info!(id = user.id, "user created");
    Ok(Json(user))
}

pub async fn get_user(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<User>, AppError> {
    UserService::get(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("user not found".into()))
}
