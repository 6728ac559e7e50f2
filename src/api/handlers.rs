use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::SearchRequest;
use crate::error::{RenderError, SearchError};

use super::AppState;
use super::models::SearchParams;

pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

type HandlerError = (StatusCode, &'static str);

fn internal_error() -> HandlerError {
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
}

fn search_failed(err: SearchError) -> HandlerError {
    tracing::error!(kind = err.kind(), "search failed: {:#}", err);
    internal_error()
}

fn render_failed(err: RenderError) -> HandlerError {
    tracing::error!("render failed: {:#}", err);
    internal_error()
}

pub async fn index_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HandlerError> {
    let html = state.renderer.render_index().map_err(render_failed)?;
    Ok(Html(html))
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Html<String>, HandlerError> {
    let start = Instant::now();

    let Query(pairs) = pairs.map_err(|e| {
        tracing::error!("malformed query string: {}", e);
        internal_error()
    })?;
    let params: SearchParams = pairs.into_iter().collect();

    let request = SearchRequest::try_from(params).map_err(search_failed)?;
    let view = state.client.search(&request).await.map_err(search_failed)?;
    let html = state.renderer.render_search(&view).map_err(render_failed)?;

    tracing::debug!(elapsed_ms = start.elapsed().as_millis(), "search rendered");
    Ok(Html(html))
}
