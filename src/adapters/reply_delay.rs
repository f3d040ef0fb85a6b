//! Reply delay adapters.

use std::time::Duration;

use rand::Rng;

use crate::config::ReplyDelayConfig;
use crate::ports::ReplyDelay;

/// Uniform random delay within the configured bounds.
#[derive(Debug, Clone)]
pub struct UniformReplyDelay {
    min: Duration,
    max: Duration,
}

impl UniformReplyDelay {
    /// Creates a delay from configuration bounds.
    pub fn from_config(config: &ReplyDelayConfig) -> Self {
        let (min, max) = config.range();
        Self { min, max }
    }
}

impl ReplyDelay for UniformReplyDelay {
    fn next_delay(&self) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        let millis = rand::thread_rng().gen_range(self.min.as_millis()..=self.max.as_millis());
        Duration::from_millis(millis as u64)
    }
}

/// Fixed delay for deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedReplyDelay {
    delay: Duration,
}

impl FixedReplyDelay {
    /// Creates a fixed delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ReplyDelay for FixedReplyDelay {
    fn next_delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_delay_stays_within_bounds() {
        let delay = UniformReplyDelay::from_config(&ReplyDelayConfig::default());
        for _ in 0..100 {
            let d = delay.next_delay();
            assert!(d >= Duration::from_millis(400));
            assert!(d <= Duration::from_millis(700));
        }
    }

    #[test]
    fn degenerate_range_returns_min() {
        let config = ReplyDelayConfig {
            min_delay_ms: 500,
            max_delay_ms: 500,
        };
        let delay = UniformReplyDelay::from_config(&config);
        assert_eq!(delay.next_delay(), Duration::from_millis(500));
    }

    #[test]
    fn fixed_delay_is_constant() {
        let delay = FixedReplyDelay::new(Duration::from_millis(5));
        assert_eq!(delay.next_delay(), Duration::from_millis(5));
    }
}
