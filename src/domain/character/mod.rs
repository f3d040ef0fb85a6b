//! Companion character entity.
//!
//! Exactly one character is active at a time; switching it triggers a full
//! reply-set reload keyed by the character id.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CharacterId, ValidationError};

/// A selectable companion persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Identifier slug; selects which reply set to load.
    id: CharacterId,

    /// Display name.
    name: String,

    /// Short descriptive tag shown next to the name.
    tag: String,
}

impl Character {
    /// Creates a new character.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is empty
    pub fn new(id: CharacterId, name: impl Into<String>, tag: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            tag: tag.into(),
        })
    }

    /// The default character a fresh session starts with.
    pub fn default_character() -> Self {
        Self {
            id: CharacterId::new("shima").expect("static id"),
            name: "shima".to_string(),
            tag: "기본".to_string(),
        }
    }

    /// Returns the character id.
    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the descriptive tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Header label, e.g. "shima(기본)".
    pub fn display_label(&self) -> String {
        format!("{}({})", self.name, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_character_is_shima() {
        let c = Character::default_character();
        assert_eq!(c.id().as_str(), "shima");
        assert_eq!(c.tag(), "기본");
    }

    #[test]
    fn new_character_rejects_empty_name() {
        let id = CharacterId::new("aoi").unwrap();
        assert!(Character::new(id, "  ", "차분").is_err());
    }

    #[test]
    fn display_label_joins_name_and_tag() {
        let id = CharacterId::new("nadesiko").unwrap();
        let c = Character::new(id, "nadesiko", "활발").unwrap();
        assert_eq!(c.display_label(), "nadesiko(활발)");
    }
}
