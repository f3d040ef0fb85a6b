//! Reply sets and turn-time resolution.

use crate::domain::foundation::CharacterId;

use super::pattern::ReplyEntry;

/// Which keyword mapping a reply set was compiled from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReplyScope {
    /// The active character's own mapping.
    Character(CharacterId),
    /// The shared mapping used by every character.
    Common,
}

impl ReplyScope {
    /// Source key for this scope, mirroring the original reply-bank ids.
    pub fn source_key(&self) -> String {
        match self {
            ReplyScope::Character(id) => format!("replies-{}", id),
            ReplyScope::Common => "replies-default".to_string(),
        }
    }
}

/// Ordered sequence of compiled reply entries for one scope.
#[derive(Debug, Clone, Default)]
pub struct ReplySet {
    entries: Vec<ReplyEntry>,
}

impl ReplySet {
    /// Creates a reply set from compiled entries, preserving their order.
    pub fn new(entries: Vec<ReplyEntry>) -> Self {
        Self { entries }
    }

    /// Creates an empty reply set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first entry matching the text, in declaration order.
    fn find_match(&self, text: &str) -> Option<&ReplyEntry> {
        self.entries.iter().find(|entry| entry.matches(text))
    }
}

/// The two reply sets live at once: the active character's and the common
/// one. A turn resolves against an immutable snapshot of this pair, so a
/// reload interleaving with an in-flight turn can never be observed as a
/// mixed-character view.
#[derive(Debug, Clone)]
pub struct ReplySets {
    character_id: CharacterId,
    character: ReplySet,
    common: ReplySet,
}

impl ReplySets {
    /// Assembles the pair of sets for a character.
    pub fn new(character_id: CharacterId, character: ReplySet, common: ReplySet) -> Self {
        Self {
            character_id,
            character,
            common,
        }
    }

    /// Returns the character these sets were compiled for.
    pub fn character_id(&self) -> &CharacterId {
        &self.character_id
    }

    /// Returns the character-scoped set.
    pub fn character_set(&self) -> &ReplySet {
        &self.character
    }

    /// Returns the common set.
    pub fn common_set(&self) -> &ReplySet {
        &self.common
    }

    /// Resolves user text to the first matching response, character set
    /// first, then common. Empty or whitespace-only input never matches.
    ///
    /// Deterministic: fixed sets and input always yield the same entry.
    pub fn resolve(&self, user_text: &str) -> Option<&str> {
        let text = user_text.trim();
        if text.is_empty() {
            return None;
        }

        [&self.character, &self.common]
            .into_iter()
            .find_map(|set| set.find_match(text))
            .map(ReplyEntry::response_text)
    }
}
