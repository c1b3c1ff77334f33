//! Observability for the Jarvis companion: subscriber setup and the
//! attribute names recorded on chat-turn spans.

pub mod chat_attrs;
pub mod tracing_setup;
