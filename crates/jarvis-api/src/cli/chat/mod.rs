//! Interactive terminal chat with Jarvis.
//!
//! Replies come either from the in-process responder or from a running
//! server over HTTP. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod remote;
pub mod renderer;
