//! Router assembly: HTTP endpoints, static demo client, CORS, and HTTP tracing.

use std::{path::Path, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// API routes only. Used directly by tests and wrapped by `build_router`.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(http::http_health))
        .route("/config", get(http::http_config))
        .route("/db-check", get(http::http_db_check))
        .route("/seed", post(http::http_seed))
        .route("/levels", get(http::http_list_levels))
        .route("/levels/:level_number", get(http::http_get_level))
        .route("/levels/:level_number/submit", post(http::http_submit))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Full application router: the API plus the static demo client from
/// `static_dir`, falling back to its `index.html`.
pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let static_service = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    api_router(state).fallback_service(static_service)
}
