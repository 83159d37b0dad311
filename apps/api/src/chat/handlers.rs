use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::chat::ChatOutcome;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    /// Operator-facing diagnostic, only set on provider failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /chat
///
/// Always answers with a usable `reply`. Provider failures return 500 with the
/// canned fallback and an `error` diagnostic; unreadable bodies count as blank.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<ChatResponse>) {
    let request: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();
    let outcome = state.chat.chat_reply(&request.message).await;

    let reply = outcome.reply().to_string();
    match outcome {
        ChatOutcome::Fallback { reason } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatResponse {
                reply,
                error: Some(reason.to_string()),
            }),
        ),
        ChatOutcome::Replied(_) | ChatOutcome::Placeholder => {
            (StatusCode::OK, Json(ChatResponse { reply, error: None }))
        }
    }
}
