//! JSON sample parser.
//!
//! This module turns raw sample text into a [`serde_json::Value`] tree. Object
//! keys keep their document order, which later drives the field order of the
//! generated classes.

use crate::error::ParseError;
use serde::Deserialize;
use serde_json::Value;

/// Parses a JSON sample from a string.
///
/// # Arguments
/// * `text` - JSON document content
///
/// # Returns
/// Parsed value or parse error.
///
/// # Errors
/// Returns [`ParseError::MissingInput`] if the text is empty or only whitespace,
/// and [`ParseError::InvalidJson`] if the document is malformed.
///
/// Nesting depth is unbounded; the stack grows on demand instead.
pub fn parse_json(text: &str) -> Result<Value, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::MissingInput);
    }

    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Parses a JSON sample from raw bytes.
///
/// # Errors
/// Returns `ParseError` if the bytes are not UTF-8 or the document is malformed.
pub fn parse_json_bytes(bytes: &[u8]) -> Result<Value, ParseError> {
    let text = std::str::from_utf8(bytes)?;
    parse_json(text)
}
