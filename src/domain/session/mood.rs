//! Mood value driving fallback tone and avatar presentation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Companion mood. Finite-state with no memory beyond "current";
/// transitions happen only as a side effect of classifying a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Baseline mood.
    #[default]
    Stable,
    /// After a positive turn.
    Bright,
    /// After a negative turn.
    Concerned,
}

impl Mood {
    /// Display label with mood iconography.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Stable => "🙂 안정",
            Mood::Bright => "😄 밝음",
            Mood::Concerned => "😟 우려",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mood::Stable => "안정",
            Mood::Bright => "밝음",
            Mood::Concerned => "우려",
        };
        write!(f, "{}", s)
    }
}
