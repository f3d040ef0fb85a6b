//! Fallback reply synthesis for turns no keyword matched.
//!
//! Each tone supplies two template fragments: one woven into the
//! negative-affect branch, one into the positive-affect branch. The
//! question and listening branches are tone-independent.

use crate::domain::sentiment::Classification;
use crate::domain::session::Tone;

/// Fixed three-option decision-support reply for question turns.
const DECISION_SUPPORT: &str = "내가 생각하는 선택지는 몇 가지가 있어. ① 지금 할 수 있는 아주 작은 행동 ② 도움을 요청할 사람 ③ 잠깐의 휴식. 어떤 것부터 시도해볼까?";

/// Generic open-ended listening prompt.
const LISTENING_PROMPT: &str = "응, 계속 들어줄게. 장소·사람·감정(0~10) 중 하나만 먼저 말해줘도 좋아.";

/// Synthesizes a reply from tone-specific templates.
pub struct FallbackComposer;

impl FallbackComposer {
    /// Composes a fallback reply for a classified turn.
    ///
    /// Priority: negative, then positive, then question, then a generic
    /// listening prompt. Pure function; mood changes belong to the caller.
    pub fn compose(classification: &Classification, tone: Tone) -> String {
        let (empathy, affirmation) = tone_fragments(tone);

        if classification.negative {
            format!(
                "그렇게 느낄 수 있어. {} 지금 가장 마음을 눌러버리는 생각이 뭐였는지 한 문장으로만 적어줄래?",
                empathy
            )
        } else if classification.positive {
            format!(
                "그 기분 좋다! {} 오늘 그 감정을 만든 요인을 기억해두면 다음에도 도움 될 거야.",
                affirmation
            )
        } else if classification.is_question {
            DECISION_SUPPORT.to_string()
        } else {
            LISTENING_PROMPT.to_string()
        }
    }
}

/// Returns the (negative-branch, positive-branch) fragments for a tone.
///
/// An unknown tone (e.g. from a corrupted profile) yields empty fragments
/// rather than an error.
fn tone_fragments(tone: Tone) -> (&'static str, &'static str) {
    match tone {
        Tone::Gentle => ("천천히 말해줘도 괜찮아.", "네가 느끼는 감정은 중요한 신호야."),
        Tone::Cheerful => ("내가 옆에서 응원할게!", "작게라도 잘한 점을 하나 찾아보자!"),
        Tone::Calm => ("상황을 하나씩 정리해보자.", "호흡을 고르고 생각을 정리해보자."),
        Tone::Unknown => ("", ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentiment::SentimentClassifier;
    use crate::domain::session::Mood;

    fn classify(text: &str) -> Classification {
        SentimentClassifier::classify(text, Mood::Stable)
    }

    #[test]
    fn gentle_negative_contains_gentle_fragment_verbatim() {
        let reply = FallbackComposer::compose(&classify("너무 외로워"), Tone::Gentle);
        assert!(reply.contains("천천히 말해줘도 괜찮아."));
        assert!(reply.contains("그렇게 느낄 수 있어."));
    }

    #[test]
    fn cheerful_positive_contains_cheerful_fragment_verbatim() {
        let reply = FallbackComposer::compose(&classify("오늘 정말 행복해"), Tone::Cheerful);
        assert!(reply.contains("작게라도 잘한 점을 하나 찾아보자!"));
        assert!(reply.contains("그 기분 좋다!"));
    }

    #[test]
    fn negative_branch_wins_over_positive() {
        let reply = FallbackComposer::compose(&classify("행복했는데 요즘 우울해"), Tone::Calm);
        assert!(reply.contains("상황을 하나씩 정리해보자."));
        assert!(reply.starts_with("그렇게 느낄 수 있어."));
    }

    #[test]
    fn question_branch_offers_three_options() {
        let reply = FallbackComposer::compose(&classify("이제 어떻게 하지?"), Tone::Gentle);
        assert_eq!(reply, DECISION_SUPPORT);
        assert!(reply.contains("①"));
        assert!(reply.contains("②"));
        assert!(reply.contains("③"));
    }

    #[test]
    fn quiet_turn_gets_listening_prompt() {
        let reply = FallbackComposer::compose(&classify("산책 다녀왔어"), Tone::Gentle);
        assert_eq!(reply, LISTENING_PROMPT);
    }

    #[test]
    fn unknown_tone_degrades_to_empty_fragment() {
        let reply = FallbackComposer::compose(&classify("외로워"), Tone::Unknown);
        assert!(reply.starts_with("그렇게 느낄 수 있어."));
        assert!(reply.ends_with("적어줄래?"));
    }
}
