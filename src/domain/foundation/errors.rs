//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_the_field_name() {
        let err = ValidationError::empty_field("character_id");
        assert_eq!(format!("{}", err), "Field 'character_id' cannot be empty");
    }

    #[test]
    fn invalid_format_displays_the_reason() {
        let err = ValidationError::invalid_format("tone", "unknown variant");
        assert_eq!(
            format!("{}", err),
            "Field 'tone' has invalid format: unknown variant"
        );
    }
}
