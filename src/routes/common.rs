//! Operational routes: liveness, database readiness, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::AnyPool;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// `ready` flips to false whenever the pool cannot run a trivial statement.
#[derive(Serialize)]
struct Readiness {
    ready: bool,
    backend: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn live() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let ready = ping(&state.pool).await;
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let body = Readiness {
        ready,
        backend: state.backend.as_str(),
        database: if ready { "reachable" } else { "unreachable" },
    };
    (status, Json(body))
}

async fn ping(pool: &AnyPool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            false
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(readiness))
        .route("/version", get(build_info))
        .with_state(state)
}
