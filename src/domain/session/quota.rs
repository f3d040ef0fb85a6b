//! Session quota state machine.
//!
//! Two states: Active (countdown running) and Locked (quota exhausted).
//! The counter is clamped at zero and never increases except via an
//! explicit reset, which restores the fixed initial grant.

use serde::{Deserialize, Serialize};

/// Lifecycle state of the session quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuotaState {
    /// Countdown running; chat accepted.
    #[default]
    Active,
    /// Quota exhausted; chat rejected until reset.
    Locked,
}

/// Outcome of a single deduction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaChange {
    /// Nothing was deducted (locked, suspended, or zero cost).
    Unchanged,
    /// Seconds were deducted; quota still Active.
    Deducted { remaining: u32 },
    /// This deduction drove the counter to zero. Fires exactly once per
    /// exhaustion; the quota is Locked from here on.
    Exhausted,
}

/// Remaining free session time, deducted by ticks and per-message costs.
///
/// # Invariants
///
/// - `free_seconds_remaining` is never negative (clamped at 0)
/// - the counter never increases except via [`SessionQuota::reset`]
/// - Active -> Locked happens exactly when the counter reaches 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionQuota {
    /// Seconds of free session time left.
    free_seconds_remaining: u32,

    /// The full grant restored by a reset.
    initial_grant_secs: u32,

    /// Current state.
    state: QuotaState,
}

impl SessionQuota {
    /// Creates a fresh quota holding the full initial grant.
    pub fn new(initial_grant_secs: u32) -> Self {
        Self {
            free_seconds_remaining: initial_grant_secs,
            initial_grant_secs,
            state: if initial_grant_secs == 0 {
                QuotaState::Locked
            } else {
                QuotaState::Active
            },
        }
    }

    /// Reconstitutes a quota from a persisted remaining value.
    ///
    /// The remaining value is clamped to the grant; zero reconstitutes as
    /// Locked.
    pub fn restore(remaining_secs: u32, initial_grant_secs: u32) -> Self {
        let remaining = remaining_secs.min(initial_grant_secs);
        Self {
            free_seconds_remaining: remaining,
            initial_grant_secs,
            state: if remaining == 0 {
                QuotaState::Locked
            } else {
                QuotaState::Active
            },
        }
    }

    /// Returns the seconds remaining.
    pub fn free_seconds_remaining(&self) -> u32 {
        self.free_seconds_remaining
    }

    /// Remaining whole minutes, rounded up, for countdown display.
    pub fn free_minutes_remaining(&self) -> u32 {
        self.free_seconds_remaining.div_ceil(60)
    }

    /// Returns the current state.
    pub fn state(&self) -> QuotaState {
        self.state
    }

    /// Returns true once the quota is exhausted.
    pub fn is_locked(&self) -> bool {
        self.state == QuotaState::Locked
    }

    /// Periodic tick deduction. Skipped while the host surface is not
    /// visible (suspended, not cancelled; no drift compensation on resume).
    pub fn tick(&mut self, visible: bool, cost_secs: u32) -> QuotaChange {
        if !visible {
            return QuotaChange::Unchanged;
        }
        self.deduct(cost_secs)
    }

    /// Immediate per-message deduction on submission acceptance.
    pub fn charge_message(&mut self, cost_secs: u32) -> QuotaChange {
        self.deduct(cost_secs)
    }

    /// Restores the fixed full grant and re-arms Active.
    pub fn reset(&mut self) {
        self.free_seconds_remaining = self.initial_grant_secs;
        self.state = if self.initial_grant_secs == 0 {
            QuotaState::Locked
        } else {
            QuotaState::Active
        };
    }

    fn deduct(&mut self, cost_secs: u32) -> QuotaChange {
        if self.is_locked() || cost_secs == 0 {
            return QuotaChange::Unchanged;
        }

        self.free_seconds_remaining = self.free_seconds_remaining.saturating_sub(cost_secs);
        if self.free_seconds_remaining == 0 {
            self.state = QuotaState::Locked;
            QuotaChange::Exhausted
        } else {
            QuotaChange::Deducted {
                remaining: self.free_seconds_remaining,
            }
        }
    }
}
