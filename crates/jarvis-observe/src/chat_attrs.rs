//! Span and attribute names for chat-turn instrumentation.
//!
//! Fields recorded on the `chat.turn` span. All constants are string
//! slices usable as `{ CONST } = value` field names in `tracing::info_span!`.

/// Where the turn came from (`http`, `cli`).
pub const CHAT_TRANSPORT: &str = "chat.transport";

/// Per-request identifier (UUIDv7).
pub const CHAT_REQUEST_ID: &str = "chat.request_id";

/// Length of the incoming message in characters.
pub const CHAT_MESSAGE_CHARS: &str = "chat.message.chars";

/// Number of history entries sent with the message.
pub const CHAT_HISTORY_LEN: &str = "chat.history.len";

/// Name of the reply rule that fired.
pub const CHAT_RULE: &str = "chat.rule";

/// Emotion tag of the reply.
pub const CHAT_EMOTION: &str = "chat.emotion";

/// Artificial delay applied before replying, in milliseconds.
pub const CHAT_DELAY_MS: &str = "chat.delay_ms";

// --- Transport values ---

pub const TRANSPORT_HTTP: &str = "http";
pub const TRANSPORT_CLI: &str = "cli";
