use std::sync::Arc;

use anyhow::Context;
use newsfront::api::{AppState, create_router};
use newsfront::config::Config;
use newsfront::news_client::NewsClient;
use newsfront::render::Renderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = Config::load()?;

    let renderer = match &config.template_path {
        Some(path) => Renderer::from_file(path)
            .with_context(|| format!("Failed to load template {}", path.display()))?,
        None => Renderer::builtin().context("Failed to load built-in template")?,
    };
    let client = NewsClient::new(config.endpoint_url()?, config.api_key.clone());
    let state = Arc::new(AppState::new(client, renderer));

    let app = create_router(state, &config.assets_dir);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
