//! One message-to-reply turn, shared by the HTTP handler and the terminal
//! chat: sample the thinking delay, sleep, then ask the responder.
//!
//! Dropping the returned future (e.g. the HTTP client going away) cancels
//! the sleep.

use std::time::Instant;

use tracing::Instrument;

use jarvis_core::delay::sample_delay;
use jarvis_observe::chat_attrs;
use jarvis_types::chat::ChatReply;
use jarvis_types::message::Message;

use crate::state::AppState;

/// Run a turn for a message already known to be non-empty.
pub async fn run_turn(
    state: &AppState,
    message: &str,
    history: &[Message],
    transport: &'static str,
) -> ChatReply {
    let request_id = uuid::Uuid::now_v7().to_string();
    let span = tracing::info_span!(
        "chat.turn",
        { chat_attrs::CHAT_TRANSPORT } = transport,
        { chat_attrs::CHAT_REQUEST_ID } = %request_id,
        { chat_attrs::CHAT_MESSAGE_CHARS } = message.chars().count(),
        { chat_attrs::CHAT_HISTORY_LEN } = history.len(),
        { chat_attrs::CHAT_DELAY_MS } = tracing::field::Empty,
        { chat_attrs::CHAT_RULE } = tracing::field::Empty,
        { chat_attrs::CHAT_EMOTION } = tracing::field::Empty,
    );

    async {
        let start = Instant::now();
        let delay = sample_delay(&state.config.thinking_delay, state.responder.random());
        let span = tracing::Span::current();
        span.record(chat_attrs::CHAT_DELAY_MS, delay.as_millis() as u64);

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let evaluation = state.responder.evaluate(message, history);
        span.record(chat_attrs::CHAT_RULE, evaluation.rule);
        span.record(chat_attrs::CHAT_EMOTION, evaluation.reply.emotion.as_str());

        tracing::info!(
            rule = evaluation.rule,
            emotion = %evaluation.reply.emotion,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Reply generated"
        );
        evaluation.reply
    }
    .instrument(span)
    .await
}
