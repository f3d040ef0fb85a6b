//! Visibility signal port.
//!
//! A boolean "is the host surface currently visible" feed, sampled by each
//! quota tick. While hidden the tick's deduction is skipped, not rescheduled.

/// Port reporting host surface visibility.
pub trait VisibilitySignal: Send + Sync {
    /// Returns true when the host surface is visible to the user.
    fn is_visible(&self) -> bool;
}
