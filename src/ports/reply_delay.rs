//! Reply delay port.
//!
//! The staged reply pause is a bounded-range random duration in production
//! and a fixed duration in tests, so turn timing stays injectable.

use std::time::Duration;

/// Port supplying the pause between "thinking" and "responding".
pub trait ReplyDelay: Send + Sync {
    /// Returns the delay to apply to the next reply.
    fn next_delay(&self) -> Duration;
}
