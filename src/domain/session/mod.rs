//! Session state: mood, avatar status, customization, and the quota
//! state machine gating the chat.

mod customization;
mod mood;
mod quota;
mod state;
mod status;

pub use customization::{CustomizationProfile, Tone};
pub use mood::Mood;
pub use quota::{QuotaChange, QuotaState, SessionQuota};
pub use state::SessionState;
pub use status::AvatarStatus;
