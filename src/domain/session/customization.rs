//! Companion customization profile.
//!
//! Persisted; mutated only through the explicit apply action, never
//! auto-derived from conversation content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Speaking tone selecting the fallback template bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Gentle,
    Cheerful,
    Calm,
    /// Unrecognized persisted value; composes with empty fragments.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tone::Gentle => "gentle",
            Tone::Cheerful => "cheerful",
            Tone::Calm => "calm",
            Tone::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Appearance and tone settings for the companion avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizationProfile {
    /// Hair color as a CSS hex string.
    pub hair_color: String,

    /// Eye color as a CSS hex string.
    pub eye_color: String,

    /// Outfit preset name.
    pub outfit: String,

    /// Fallback template bank selector.
    pub tone: Tone,

    /// Free-form interests text.
    pub interests: String,
}

impl Default for CustomizationProfile {
    fn default() -> Self {
        Self {
            hair_color: "#6b7cff".to_string(),
            eye_color: "#2b2b2b".to_string(),
            outfit: "casual".to_string(),
            tone: Tone::Gentle,
            interests: String::new(),
        }
    }
}

impl CustomizationProfile {
    /// Normalizes user-entered fields (trims interests).
    pub fn normalized(mut self) -> Self {
        self.interests = self.interests.trim().to_string();
        self
    }
}
