//! Clock trait for reading the local wall-clock time.
//!
//! Defined in jarvis-core so the responder can quote the current time
//! without coupling to a time source. The `SystemClock` adapter lives in
//! jarvis-infra.

use chrono::NaiveDateTime;

/// Abstraction over the local wall clock.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}
