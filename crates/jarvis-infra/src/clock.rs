//! Local wall clock backed by `chrono::Local`.

use chrono::{Local, NaiveDateTime};

use jarvis_core::clock::Clock;

/// Reads the host's local time on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_tracks_local_time() {
        let before = Local::now().naive_local();
        let now = SystemClock::new().now();
        let after = Local::now().naive_local();
        assert!(before <= now && now <= after);
    }
}
