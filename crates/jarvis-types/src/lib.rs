//! Shared domain types for the Jarvis companion.
//!
//! This crate contains the types passed between the responder, the HTTP
//! transport and the terminal client: emotion tags, conversation messages,
//! request/reply payloads, configuration and error enums.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod emotion;
pub mod error;
pub mod message;
