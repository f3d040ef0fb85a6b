//! Avatar status shown during the staged reply sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally visible stage of the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AvatarStatus {
    /// Session loaded, nothing in flight.
    #[default]
    Ready,
    /// Turn accepted, reply being decided.
    Thinking,
    /// Reply being delivered.
    Responding,
    /// Settled state after a completed turn.
    InConversation,
}

impl AvatarStatus {
    /// Korean display label.
    pub fn label(&self) -> &'static str {
        match self {
            AvatarStatus::Ready => "준비됨",
            AvatarStatus::Thinking => "생각 중…",
            AvatarStatus::Responding => "응답 중",
            AvatarStatus::InConversation => "대화 중",
        }
    }
}

impl fmt::Display for AvatarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
