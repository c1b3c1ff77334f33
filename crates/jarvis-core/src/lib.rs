//! Reply logic and port definitions for the Jarvis companion.
//!
//! This crate holds the keyword responder and the traits ("ports") it needs
//! from the outside world: a wall clock and a uniform random source. The
//! concrete adapters live in `jarvis-infra`. It depends only on
//! `jarvis-types` -- never on `jarvis-infra`, HTTP or IO crates.

pub mod clock;
pub mod delay;
pub mod emotion;
pub mod random;
pub mod replies;
pub mod responder;
pub mod rules;
