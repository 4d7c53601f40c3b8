use axum::{extract::State, Json};

use crate::domain::{ChatRequest, ChatResponse};

use super::error::ApiError;
use super::state::AppState;

/// `POST /chat`: recovered failures still answer 200 with an apology reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let outcome = state.chat.execute(&request).await?;
    Ok(Json(outcome.into_response()))
}
