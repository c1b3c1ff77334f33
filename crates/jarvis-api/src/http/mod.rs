//! HTTP transport for the Jarvis companion.
//!
//! Axum-based JSON API at `/api/` with CORS, request tracing and panic
//! containment. Replies are flat `{ response, emotion }` objects; every
//! failure is a flat `{ error }` object.

pub mod error;
pub mod handlers;
pub mod router;
