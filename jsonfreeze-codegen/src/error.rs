//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// JSON sample parsing error.
    #[error("{0}")]
    Parse(#[from] jsonfreeze_schema::ParseError),

    /// Intermediate representation error.
    #[error("schema error: {0}")]
    Schema(#[from] jsonfreeze_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rename pattern could not be compiled.
    #[error("rename pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Unrecognized field mode.
    #[error("invalid field mode '{value}', expected one of: final, required, optional")]
    InvalidFieldMode {
        /// Rejected value.
        value: String,
    },

    /// Rename target is not a generated class.
    #[error("unknown class '{name}'")]
    UnknownClass {
        /// Class name.
        name: String,
    },

    /// Rename replacement is not a valid identifier.
    #[error("invalid class name '{name}'")]
    InvalidClassName {
        /// Rejected name.
        name: String,
    },

    /// Rename replacement is already used by another class.
    #[error("class name '{name}' is already in use")]
    DuplicateClassName {
        /// Conflicting name.
        name: String,
    },
}

impl CodegenError {
    /// Creates an invalid field mode error.
    pub fn invalid_field_mode(value: impl Into<String>) -> Self {
        Self::InvalidFieldMode {
            value: value.into(),
        }
    }

    /// Creates an unknown class error.
    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::UnknownClass { name: name.into() }
    }

    /// Returns true if the input was empty.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::Parse(e) if e.is_missing_input())
    }

    /// Returns true if the input could not be parsed.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Parse(e) if e.is_invalid_input())
    }
}
