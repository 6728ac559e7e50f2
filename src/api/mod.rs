use axum::{Router, routing::get};
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::news_client::NewsClient;
use crate::render::Renderer;

pub mod handlers;
pub mod models;

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub client: NewsClient,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(client: NewsClient, renderer: Renderer) -> AppState {
        AppState { client, renderer }
    }
}

pub fn create_router(state: Arc<AppState>, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/search", get(handlers::search_handler))
        .route("/search/", get(handlers::search_handler))
        .route("/search/*rest", get(handlers::search_handler))
        .fallback(handlers::index_handler)
        .with_state(state)
        // Static files for the pages
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
