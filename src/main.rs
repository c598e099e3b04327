use anyhow::Context;
use shopping_catalog::config::load_settings;
use shopping_catalog::router::{create_app_router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Configure the server address
    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.bind_addr))?;

    // Initialize application state and router
    let state = Arc::new(AppState::new(settings));
    let app = create_app_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "catalog host listening");
    axum::serve(listener, app).await?;

    Ok(())
}
