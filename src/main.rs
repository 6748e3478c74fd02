//! Server binary: settings from env, connect with retry, migrate, serve.

use mini_ecommerce::{app, apply_migrations, connect, AppState, Settings};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mini_ecommerce=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "startup failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing::info!(app_env = %settings.app_env, tier = ?settings.tier(), "settings loaded");

    let (pool, backend) = connect(&settings).await?;
    apply_migrations(&pool, backend).await?;

    let router = app(AppState::new(pool, backend), settings.body_limit_bytes);
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
