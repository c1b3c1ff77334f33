//! Sampling of the artificial "thinking" delay.

use std::time::Duration;

use jarvis_types::config::ThinkingDelayConfig;

use crate::random::RandomSource;

/// Sample a delay uniformly from `[min_ms, max_ms)`.
///
/// A degenerate range (`max_ms <= min_ms`) yields exactly `min_ms`.
pub fn sample_delay(config: &ThinkingDelayConfig, random: &impl RandomSource) -> Duration {
    let span = config.max_ms.saturating_sub(config.min_ms);
    let offset = if span == 0 { 0 } else { random.below(span).min(span - 1) };
    Duration::from_millis(config.min_ms + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(u64);

    impl RandomSource for Constant {
        fn below(&self, _bound: u64) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_sample_within_range() {
        let config = ThinkingDelayConfig::default();
        assert_eq!(sample_delay(&config, &Constant(0)), Duration::from_millis(500));
        assert_eq!(sample_delay(&config, &Constant(999)), Duration::from_millis(1499));
    }

    #[test]
    fn test_sample_clamps_source_overshoot() {
        let config = ThinkingDelayConfig { min_ms: 10, max_ms: 20 };
        assert_eq!(sample_delay(&config, &Constant(500)), Duration::from_millis(19));
    }

    #[test]
    fn test_degenerate_range_is_fixed() {
        let config = ThinkingDelayConfig { min_ms: 300, max_ms: 100 };
        assert_eq!(sample_delay(&config, &Constant(7)), Duration::from_millis(300));
    }

    #[test]
    fn test_disabled_delay_is_zero() {
        let config = ThinkingDelayConfig::disabled();
        assert_eq!(sample_delay(&config, &Constant(7)), Duration::ZERO);
    }
}
