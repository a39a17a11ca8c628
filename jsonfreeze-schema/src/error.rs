//! Error types for JSON parsing and schema validation.

use thiserror::Error;

/// Error type for JSON sample parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No input was supplied (empty or whitespace-only text).
    #[error("missing input: no JSON document was provided")]
    MissingInput,

    /// The input is not well-formed JSON.
    #[error("invalid input: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl ParseError {
    /// Returns true if the error was raised before any parsing took place.
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput)
    }

    /// Returns true if the input was present but malformed.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidJson(_) | Self::Utf8(_))
    }
}

/// Error type for intermediate representation validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two classes share the same identifier.
    #[error("duplicate class identifier '{name}'")]
    DuplicateClass {
        /// Class name.
        name: String,
    },

    /// A field references a class that was never generated.
    #[error("field '{field}' of class '{class}' references unknown class '{target}'")]
    DanglingReference {
        /// Owning class name.
        class: String,
        /// Field display name.
        field: String,
        /// Referenced class name.
        target: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates a duplicate class error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateClass { name: name.into() }
    }

    /// Creates a dangling reference error.
    pub fn dangling(
        class: impl Into<String>,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::DanglingReference {
            class: class.into(),
            field: field.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_display() {
        let err = ParseError::MissingInput;
        assert!(err.is_missing_input());
        assert!(!err.is_invalid_input());
        assert!(err.to_string().starts_with("missing input"));
    }

    #[test]
    fn test_invalid_json_display() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ParseError::from(source);
        assert!(err.is_invalid_input());
        assert!(err.to_string().starts_with("invalid input"));
    }

    #[test]
    fn test_schema_error_helpers() {
        let err = SchemaError::duplicate("Address");
        assert_eq!(err.to_string(), "duplicate class identifier 'Address'");

        let err = SchemaError::dangling("User", "address", "Address");
        assert!(err.to_string().contains("unknown class 'Address'"));
    }
}
