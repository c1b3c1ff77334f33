//! Infrastructure implementations for the Jarvis companion.
//!
//! Concrete adapters for the ports defined in `jarvis-core` (wall clock,
//! random source) and the configuration file loader.

pub mod clock;
pub mod config;
pub mod random;
