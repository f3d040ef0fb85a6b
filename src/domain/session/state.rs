//! Aggregate session state owned by the orchestrator.

use serde::{Deserialize, Serialize};

use super::{AvatarStatus, Mood, QuotaState, SessionQuota};

/// Everything the presentation layer needs to render one local session.
///
/// Mutated only on the single execution thread; no ambient globals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Remaining free time and lockout state.
    quota: SessionQuota,

    /// Current companion mood.
    mood: Mood,

    /// Presence label shown in the header.
    presence: String,

    /// Counselling mode label.
    mode_label: String,

    /// Current avatar status stage.
    avatar_status: AvatarStatus,

    /// Whether voice mode is switched on.
    voice_enabled: bool,
}

impl SessionState {
    /// Creates a fresh session holding the full quota grant.
    pub fn new(initial_grant_secs: u32) -> Self {
        Self::with_quota(SessionQuota::new(initial_grant_secs))
    }

    /// Creates a session around a (possibly restored) quota.
    pub fn with_quota(quota: SessionQuota) -> Self {
        Self {
            quota,
            mood: Mood::default(),
            presence: "온라인".to_string(),
            mode_label: "라이트 상담".to_string(),
            avatar_status: AvatarStatus::default(),
            voice_enabled: false,
        }
    }

    /// Returns the quota.
    pub fn quota(&self) -> &SessionQuota {
        &self.quota
    }

    /// Returns the quota for mutation.
    pub fn quota_mut(&mut self) -> &mut SessionQuota {
        &mut self.quota
    }

    /// Returns the current mood.
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Sets the current mood.
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    /// Returns the presence label.
    pub fn presence(&self) -> &str {
        &self.presence
    }

    /// Returns the mode label.
    pub fn mode_label(&self) -> &str {
        &self.mode_label
    }

    /// Returns the avatar status.
    pub fn avatar_status(&self) -> AvatarStatus {
        self.avatar_status
    }

    /// Sets the avatar status.
    pub fn set_avatar_status(&mut self, status: AvatarStatus) {
        self.avatar_status = status;
    }

    /// Returns true while chat is gated by an exhausted quota.
    pub fn is_locked(&self) -> bool {
        self.quota.state() == QuotaState::Locked
    }

    /// Returns whether voice mode is on.
    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    /// Flips voice mode and returns the new value.
    pub fn toggle_voice(&mut self) -> bool {
        self.voice_enabled = !self.voice_enabled;
        self.voice_enabled
    }
}
