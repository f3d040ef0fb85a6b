//! Presenter port - the presentation collaborator.
//!
//! Consumes staged status changes, chat messages, session refreshes, and
//! the Locked-state notification (input affordance swaps to an upgrade
//! prompt). Rendering itself is out of scope.

use async_trait::async_trait;

use crate::domain::foundation::{MessageId, Timestamp};
use crate::domain::session::{AvatarStatus, SessionState};

/// Who spoke a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Companion,
}

/// One rendered message bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique id of this message.
    pub id: MessageId,
    /// Who spoke.
    pub speaker: Speaker,
    /// Message text, verbatim.
    pub text: String,
    /// When the message was produced.
    pub sent_at: Timestamp,
}

impl ChatMessage {
    /// Creates a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::speak(Speaker::User, text)
    }

    /// Creates a companion message.
    pub fn companion(text: impl Into<String>) -> Self {
        Self::speak(Speaker::Companion, text)
    }

    fn speak(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            speaker,
            text: text.into(),
            sent_at: Timestamp::now(),
        }
    }
}

/// Port for everything the user sees.
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Shows a staged avatar status change.
    async fn show_status(&self, status: AvatarStatus);

    /// Appends a message bubble to the chat log.
    async fn show_message(&self, message: &ChatMessage);

    /// Re-renders countdown, mood iconography, and header bindings.
    async fn refresh_session(&self, state: &SessionState);

    /// Swaps the input affordance for the upgrade prompt. Sent when a
    /// submission is rejected by an exhausted quota and when the quota
    /// first locks.
    async fn show_upsell(&self);
}
