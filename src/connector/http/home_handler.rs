use std::io::ErrorKind;

use axum::{extract::State, response::Html, Json};
use serde_json::{json, Value};

use super::error::ApiError;
use super::state::AppState;

pub const HOME_TEMPLATE: &str = "home.html";

/// `GET /`: the chat widget page, read from the templates directory on each
/// request so it can be edited without a restart.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = state.templates_dir.join(HOME_TEMPLATE);

    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ApiError::NotFound(format!(
            "landing page template {} not found",
            path.display()
        ))),
        Err(e) => Err(ApiError::Internal(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
