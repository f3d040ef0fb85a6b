//! Keyword pattern compilation.
//!
//! The keyword source is a JSON object mapping pattern strings to response
//! strings. A pattern string may join several alternative keywords with `|`,
//! e.g. `"안녕|hello|hi"`. Matching is case-insensitive substring match
//! against any one alternative, so no regular expressions are needed.

use serde_json::Value;
use tracing::warn;

/// One compiled keyword entry: a set of alternatives and the response they
/// trigger. Immutable once compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEntry {
    /// Lowercased alternative keywords; any one matching fires the entry.
    alternatives: Vec<String>,

    /// The response text returned on a match, verbatim.
    response_text: String,
}

impl ReplyEntry {
    /// Compiles a single `pattern -> response` pair.
    ///
    /// Returns `None` when the pattern yields no usable alternatives
    /// (e.g. `""` or `"|"`), so such entries can never match.
    fn compile(pattern: &str, response: &str) -> Option<Self> {
        let alternatives: Vec<String> = pattern
            .split('|')
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
            .map(str::to_lowercase)
            .collect();

        if alternatives.is_empty() {
            return None;
        }

        Some(Self {
            alternatives,
            response_text: response.to_string(),
        })
    }

    /// Case-insensitive substring match against any alternative.
    pub fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.alternatives.iter().any(|alt| lower.contains(alt))
    }

    /// Returns the response text.
    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    /// Returns the compiled alternatives.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }
}

/// Compiles a raw keyword mapping into an ordered matcher list.
pub struct PatternCompiler;

impl PatternCompiler {
    /// Compiles raw JSON source into reply entries, preserving the input
    /// declaration order (first-defined keyword wins on tie).
    ///
    /// Degrades rather than fails: empty or whitespace-only source yields an
    /// empty list, as does source that is not a JSON object. Entries whose
    /// value is not a string are skipped.
    pub fn compile(raw: &str) -> Vec<ReplyEntry> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let value: Value = match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "keyword source is not valid JSON; using empty reply set");
                return Vec::new();
            }
        };

        let Value::Object(map) = value else {
            warn!("keyword source is not a JSON object; using empty reply set");
            return Vec::new();
        };

        map.iter()
            .filter_map(|(pattern, response)| match response {
                Value::String(text) => ReplyEntry::compile(pattern, text),
                other => {
                    warn!(pattern = %pattern, value = %other, "skipping non-string response");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_entries_in_declaration_order() {
        let entries = PatternCompiler::compile(r#"{"안녕|hello": "인사!", "게임": "게임 좋지"}"#);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].response_text(), "인사!");
        assert_eq!(entries[1].response_text(), "게임 좋지");
    }

    #[test]
    fn splits_alternatives_on_pipe() {
        let entries = PatternCompiler::compile(r#"{"안녕|hello|hi": "인사!"}"#);
        assert_eq!(entries[0].alternatives(), &["안녕", "hello", "hi"]);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let entries = PatternCompiler::compile(r#"{"hello": "hi there"}"#);
        assert!(entries[0].matches("Well HELLO friend"));
        assert!(!entries[0].matches("goodbye"));
    }

    #[test]
    fn empty_source_yields_empty_list() {
        assert!(PatternCompiler::compile("").is_empty());
        assert!(PatternCompiler::compile("   \n  ").is_empty());
    }

    #[test]
    fn malformed_source_yields_empty_list() {
        assert!(PatternCompiler::compile("{not json").is_empty());
        assert!(PatternCompiler::compile("[1, 2]").is_empty());
        assert!(PatternCompiler::compile("\"just a string\"").is_empty());
    }

    #[test]
    fn non_string_responses_are_skipped() {
        let entries = PatternCompiler::compile(r#"{"a": 1, "b": "ok"}"#);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].response_text(), "ok");
    }

    #[test]
    fn blank_alternatives_never_match() {
        let entries = PatternCompiler::compile(r#"{"|": "unreachable", " ": "also"}"#);
        assert!(entries.is_empty());
    }

    #[test]
    fn blank_alternative_within_pattern_is_dropped() {
        let entries = PatternCompiler::compile(r#"{"hello||hi": "인사!"}"#);
        assert_eq!(entries[0].alternatives(), &["hello", "hi"]);
        assert!(!entries[0].matches("good morning"));
        assert!(entries[0].matches("hi"));
    }
}
