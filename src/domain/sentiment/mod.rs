//! Sentiment and intent classification for unmatched user text.
//!
//! Detection is fixed keyword matching over small Korean and English marker
//! sets. Negative and positive can both fire on the same text; only the
//! proposed mood gives negative precedence.

use crate::domain::session::Mood;

/// Markers signalling loneliness or distress. Korean stems appear in both
/// vowel-harmonized forms so conjugations like 외로워 and 외롭다 both match.
const NEGATIVE_MARKERS: &[&str] = &["외로", "외롭", "lonely", "힘들", "sad", "불안", "우울", "허전"];

/// Markers signalling happiness or gratitude.
const POSITIVE_MARKERS: &[&str] = &["행복", "좋아", "기쁨", "고마", "설렘", "괜찮"];

/// Interrogative phrases that mark a question even without a question mark.
const QUESTION_MARKERS: &[&str] = &["어떻게", "될까", "해도 될", "무엇을"];

/// Result of classifying one user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Loneliness/distress markers detected.
    pub negative: bool,

    /// Happiness/gratitude markers detected.
    pub positive: bool,

    /// Text reads as a question.
    pub is_question: bool,

    /// Mood the session should move to. Negative wins over positive; quiet
    /// input leaves the current mood unchanged (no reset to neutral).
    pub proposed_mood: Mood,
}

/// Labels user text as negative/positive/question and proposes a mood.
pub struct SentimentClassifier;

impl SentimentClassifier {
    /// Classifies text against the fixed marker sets.
    ///
    /// Pure function of the text and the previous mood.
    pub fn classify(text: &str, current_mood: Mood) -> Classification {
        let lower = text.to_lowercase();

        let negative = NEGATIVE_MARKERS.iter().any(|m| lower.contains(m));
        let positive = POSITIVE_MARKERS.iter().any(|m| lower.contains(m));
        let is_question = lower.trim_end().ends_with(['?', '？'])
            || QUESTION_MARKERS.iter().any(|m| lower.contains(m));

        let proposed_mood = if negative {
            Mood::Concerned
        } else if positive {
            Mood::Bright
        } else {
            current_mood
        };

        Classification {
            negative,
            positive,
            is_question,
            proposed_mood,
        }
    }
}
