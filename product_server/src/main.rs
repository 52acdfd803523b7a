//! Product server: connects to PostgreSQL, ensures the products table, serves the product API.
//!
//! Run from repo root: `cargo run -p product-server`

use product_api::{app, ensure_products_table, AppState, PgProductStore, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("product_api=info,product_server=info,tower_http=info")
            }),
        )
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(database = %settings.redacted_database_url(), "connecting to database");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.database_url)
        .await?;

    ensure_products_table(&pool).await?;

    let state = AppState::new(Arc::new(PgProductStore::new(pool)));
    let router = app(state, &settings);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
