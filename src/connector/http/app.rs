use std::path::Path;

use axum::routing::{get, post};
use tower_http::cors::{self, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::chat_handler;
use super::home_handler;
use super::state::AppState;

/// Assemble the HTTP surface: landing page, chat endpoint, health check and
/// static assets under `/static`.
pub fn http_app(state: AppState, static_dir: impl AsRef<Path>) -> axum::Router {
    axum::Router::new()
        .route("/", get(home_handler::home))
        .route("/chat", post(chat_handler::chat))
        .route("/health", get(home_handler::health))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods(cors::Any)
                .allow_headers(cors::Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
