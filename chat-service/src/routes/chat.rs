use crate::models::responses::{ChatRequest, ChatResponse};
use crate::services::chat::respond;
use crate::AppState;
use axum::{extract::State, response::Json};
use tracing::debug;

/// `POST /chat`. Always answers 200; lookup failures are reported in the text.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    debug!("Chat message: {:?}", request.message);

    let response = respond(state.catalog.as_ref(), &state.genres, &request.message).await;

    Json(ChatResponse { response })
}
