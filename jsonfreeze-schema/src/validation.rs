//! Intermediate representation validation utilities.
//!
//! The walker always produces a consistent IR. These checks guard IR that was
//! built or edited by hand before it reaches the emitter.

use crate::error::SchemaError;
use crate::ir::{SchemaIr, is_dart_identifier};
use std::collections::HashSet;

/// Validates a decomposed schema.
///
/// # Arguments
/// * `ir` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if identifiers repeat or a field references a class
/// that does not exist.
pub fn validate_classes(ir: &SchemaIr) -> Result<(), SchemaError> {
    validate_identifiers(ir)?;
    validate_references(ir)?;
    Ok(())
}

/// Checks that class identifiers are unique Dart identifiers.
fn validate_identifiers(ir: &SchemaIr) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for class in &ir.classes {
        if !is_dart_identifier(&class.name) {
            return Err(SchemaError::Validation {
                message: format!("invalid class identifier '{}'", class.name),
            });
        }
        if !seen.insert(class.name.as_str()) {
            return Err(SchemaError::duplicate(&class.name));
        }
    }

    Ok(())
}

/// Checks that every class reference resolves.
fn validate_references(ir: &SchemaIr) -> Result<(), SchemaError> {
    let names: HashSet<&str> = ir.classes.iter().map(|c| c.name.as_str()).collect();

    for class in &ir.classes {
        for field in &class.fields {
            if let Some(target) = field.ty.class_ref() {
                if !names.contains(target) {
                    return Err(SchemaError::dangling(&class.name, &field.name, target));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ClassSchema, FieldSchema};
    use crate::parser::parse_json;

    #[test]
    fn test_walker_output_is_valid() {
        let value = parse_json(
            r#"{"a": {"x": {"y": 1}}, "b": {"x": {"y": 2}}, "items": [{"x": {"y": 3}}]}"#,
        )
        .expect("Failed to parse");
        let ir = SchemaIr::from_json(&value, "Root");
        assert!(validate_classes(&ir).is_ok());
    }

    #[test]
    fn test_duplicate_identifier() {
        let ir = SchemaIr {
            classes: vec![ClassSchema::new("User"), ClassSchema::new("User")],
        };
        let result = validate_classes(&ir);
        assert!(matches!(result, Err(SchemaError::DuplicateClass { .. })));
    }

    #[test]
    fn test_empty_identifier() {
        let ir = SchemaIr {
            classes: vec![ClassSchema::new("")],
        };
        assert!(matches!(
            validate_classes(&ir),
            Err(SchemaError::Validation { .. })
        ));
    }

    #[test]
    fn test_numeric_identifier() {
        let ir = SchemaIr {
            classes: vec![ClassSchema::new("2")],
        };
        assert!(matches!(
            validate_classes(&ir),
            Err(SchemaError::Validation { ref message }) if message.contains("'2'")
        ));
    }

    #[test]
    fn test_dangling_reference() {
        let mut root = ClassSchema::new("User");
        root.fields.push(FieldSchema::nested("items", "Item", true));
        let ir = SchemaIr {
            classes: vec![root],
        };
        let result = validate_classes(&ir);
        assert!(matches!(
            result,
            Err(SchemaError::DanglingReference { ref target, .. }) if target == "Item"
        ));
    }
}
