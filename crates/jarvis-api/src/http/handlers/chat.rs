//! Chat endpoint.
//!
//! POST /api/chat
//!
//! The body is read as raw bytes and parsed as JSON whatever the
//! `Content-Type`. `message` is required and follows truthiness rules
//! (absent, `null`, `false`, `0` or `""` is a 400); `history` is accepted
//! in any shape. A body that is not JSON, or a truthy non-string message,
//! is an internal failure.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use jarvis_observe::chat_attrs::TRANSPORT_HTTP;
use jarvis_types::chat::{ChatReply, ChatRequest};

use crate::http::error::AppError;
use crate::state::AppState;
use crate::turn::run_turn;

/// POST /api/chat - Generate a reply for one message.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatReply>, AppError> {
    let value: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("failed to decode chat request: {e}")))?;

    let request = ChatRequest::from_json(value)?;
    let message = request.require_message()?;
    let reply = run_turn(&state, message, &request.history, TRANSPORT_HTTP).await;

    Ok(Json(reply))
}
