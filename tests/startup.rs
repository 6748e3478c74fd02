mod common;

use axum::http::StatusCode;
use common::{get, test_app, test_state};
use mini_ecommerce::migration::{applied_versions, MIGRATIONS};
use mini_ecommerce::{apply_migrations, Backend};

#[tokio::test]
async fn migrations_are_idempotent() {
    let state = test_state().await;
    let again = apply_migrations(&state.pool, Backend::Sqlite).await.unwrap();
    assert!(again.is_empty());

    let versions = applied_versions(&state.pool).await.unwrap();
    assert_eq!(versions.len(), MIGRATIONS.len());
    for m in MIGRATIONS {
        assert!(versions.contains(&m.version));
    }
}

#[tokio::test]
async fn table_without_ledger_row_is_reapplied() {
    let state = test_state().await;
    sqlx::query("DELETE FROM schema_migrations WHERE version = 2")
        .execute(&state.pool)
        .await
        .unwrap();

    let applied = apply_migrations(&state.pool, Backend::Sqlite).await.unwrap();
    assert_eq!(applied, vec![2]);
    assert_eq!(applied_versions(&state.pool).await.unwrap().len(), MIGRATIONS.len());
}

#[tokio::test]
async fn health_ready_and_version() {
    let (app, _) = test_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["backend"], "sqlite");
    assert_eq!(body["database"], "reachable");

    let (status, body) = get(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "mini-ecommerce");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn ready_reports_closed_pool() {
    let (app, state) = test_app().await;
    state.pool.close().await;
    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["ready"], false);
    assert_eq!(body["database"], "unreachable");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (app, _) = test_app().await;
    let (status, _) = get(&app, "/carts").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
