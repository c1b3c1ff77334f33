//! Application state wiring the responder to its concrete adapters.
//!
//! AppState holds the responder used by both the CLI and the HTTP server.
//! The responder is generic over the clock and random-source ports;
//! AppState pins it to the infra implementations.

use std::sync::Arc;

use jarvis_core::responder::Responder;
use jarvis_infra::clock::SystemClock;
use jarvis_infra::random::ThreadRandom;
use jarvis_types::config::JarvisConfig;

/// Concrete type alias for the responder pinned to infra implementations.
pub type ConcreteResponder = Responder<SystemClock, ThreadRandom>;

/// Shared application state. Cheap to clone; nothing inside is mutable.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<ConcreteResponder>,
    pub config: Arc<JarvisConfig>,
}

impl AppState {
    pub fn new(config: JarvisConfig) -> Self {
        Self {
            responder: Arc::new(Responder::new(SystemClock::new(), ThreadRandom::new())),
            config: Arc::new(config),
        }
    }
}
