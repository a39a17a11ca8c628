//! Type labels inferred from JSON values.
//!
//! A [`TypeLabel`] is the target-language type assigned to a field. Labels are
//! rendered as Dart type expressions by [`TypeLabel::dart_type`].

use serde::Serialize;
use std::fmt;

/// Inferred type of a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "camelCase")]
pub enum TypeLabel {
    /// JSON string.
    String,
    /// Number without a fractional component.
    Int,
    /// Number with a fractional component.
    Double,
    /// JSON boolean.
    Bool,
    /// Sequence whose element type was sampled from the first element.
    List(Box<TypeLabel>),
    /// Plain object that was not decomposed into a class.
    Map,
    /// Null or otherwise unknown shape.
    Dynamic,
    /// Reference to a generated class.
    Class(String),
}

impl TypeLabel {
    /// Creates a list label with the given element type.
    #[must_use]
    pub fn list_of(element: TypeLabel) -> Self {
        Self::List(Box::new(element))
    }

    /// Creates a reference to a generated class.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// Returns the Dart type expression for this label.
    #[must_use]
    pub fn dart_type(&self) -> String {
        match self {
            Self::String => "String".to_string(),
            Self::Int => "int".to_string(),
            Self::Double => "double".to_string(),
            Self::Bool => "bool".to_string(),
            Self::List(element) => format!("List<{}>", element.dart_type()),
            Self::Map => "Map<String, dynamic>".to_string(),
            Self::Dynamic => "dynamic".to_string(),
            Self::Class(name) => name.clone(),
        }
    }

    /// Returns the class this label ultimately refers to, looking through lists.
    #[must_use]
    pub fn class_ref(&self) -> Option<&str> {
        match self {
            Self::Class(name) => Some(name),
            Self::List(element) => element.class_ref(),
            _ => None,
        }
    }

    /// Returns true for labels that never refer to a generated class.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.class_ref().is_none()
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dart_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_dart_types() {
        assert_eq!(TypeLabel::String.dart_type(), "String");
        assert_eq!(TypeLabel::Int.dart_type(), "int");
        assert_eq!(TypeLabel::Double.dart_type(), "double");
        assert_eq!(TypeLabel::Bool.dart_type(), "bool");
        assert_eq!(TypeLabel::Map.dart_type(), "Map<String, dynamic>");
        assert_eq!(TypeLabel::Dynamic.dart_type(), "dynamic");
    }

    #[test]
    fn test_nested_list_dart_type() {
        let label = TypeLabel::list_of(TypeLabel::list_of(TypeLabel::Int));
        assert_eq!(label.dart_type(), "List<List<int>>");
        assert_eq!(label.to_string(), "List<List<int>>");
    }

    #[test]
    fn test_class_ref_through_list() {
        let label = TypeLabel::list_of(TypeLabel::class("Item"));
        assert_eq!(label.class_ref(), Some("Item"));
        assert_eq!(label.dart_type(), "List<Item>");
        assert!(!label.is_primitive());
        assert!(TypeLabel::list_of(TypeLabel::String).is_primitive());
    }

    #[test]
    fn test_serialize_label() {
        let json = serde_json::to_string(&TypeLabel::list_of(TypeLabel::Int)).expect("serialize");
        assert_eq!(json, r#"{"kind":"list","of":{"kind":"int"}}"#);
    }
}
