//! Error types for a3s-cron-describe

use crate::types::FieldKind;
use thiserror::Error;

/// Errors that can occur while parsing or describing a cron expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    /// Expression string is empty or whitespace only
    #[error("Cron expression is empty")]
    EmptyExpression,

    /// `@`-prefixed alias that is not in the alias table
    #[error("Unknown special expression: '{0}'")]
    UnknownAlias(String),

    /// Fewer than five whitespace-separated fields
    #[error("Expression has only {count} part{}. At least 5 parts are required.", plural_suffix(.count))]
    TooFewFields { count: usize },

    /// More than seven whitespace-separated fields
    #[error("Expression has {count} parts; too many!")]
    TooManyFields { count: usize },

    /// Shorthand character used where the field shape forbids it
    #[error("{0}")]
    InvalidShorthandPlacement(String),

    /// Field contains characters outside its allowed set
    #[error("Expression contains invalid values in the {field} part: '{chars}'")]
    InvalidCharacter { field: FieldKind, chars: String },

    /// Numeric literal outside the field's bounds
    ///
    /// `bounds` is reported in the caller's index base (e.g. 0..=11 for
    /// zero-indexed months).
    #[error("{field} part must be >= {} and <= {} (got {value})", .bounds.0, .bounds.1)]
    Range {
        field: FieldKind,
        value: i64,
        bounds: (i64, i64),
    },

    /// Requested locale is not registered
    #[error("Locale '{0}' could not be found")]
    LocaleNotFound(String),

    /// The process-wide catalog was already built
    #[error("Shared locale catalog is already initialized")]
    CatalogAlreadyInitialized,
}

fn plural_suffix(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Result type alias for description operations
pub type Result<T> = std::result::Result<T, DescriptionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_fields_message() {
        assert_eq!(
            DescriptionError::TooFewFields { count: 1 }.to_string(),
            "Expression has only 1 part. At least 5 parts are required."
        );
        assert_eq!(
            DescriptionError::TooFewFields { count: 3 }.to_string(),
            "Expression has only 3 parts. At least 5 parts are required."
        );
    }

    #[test]
    fn test_range_message_names_field() {
        let err = DescriptionError::Range {
            field: FieldKind::Minutes,
            value: 60,
            bounds: (0, 59),
        };
        assert_eq!(err.to_string(), "minutes part must be >= 0 and <= 59 (got 60)");
    }

    #[test]
    fn test_invalid_character_message() {
        let err = DescriptionError::InvalidCharacter {
            field: FieldKind::Hours,
            chars: "X,Y".to_string(),
        };
        assert!(err.to_string().contains("hours"));
        assert!(err.to_string().contains("'X,Y'"));
    }
}
