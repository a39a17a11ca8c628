//! Intermediate representation for code generation.
//!
//! The walker flattens a nested JSON sample into a list of [`ClassSchema`]
//! values, root first, which the emitter renders one by one.

use crate::types::TypeLabel;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static DART_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

/// Intermediate representation of a decomposed JSON sample.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaIr {
    /// Classes in output order (root first, dependencies after).
    pub classes: Vec<ClassSchema>,
}

impl SchemaIr {
    /// Returns the root class, if any class was produced.
    #[must_use]
    pub fn root(&self) -> Option<&ClassSchema> {
        self.classes.first()
    }

    /// Gets a class by identifier.
    #[must_use]
    pub fn get_class(&self, name: &str) -> Option<&ClassSchema> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Returns the class identifiers in output order.
    #[must_use]
    pub fn class_names(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.name.clone()).collect()
    }

    /// Returns the number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no classes were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// A generated class and its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSchema {
    /// Class identifier, unique within one generation run.
    pub name: String,
    /// Fields in key insertion order.
    pub fields: Vec<FieldSchema>,
}

impl ClassSchema {
    /// Creates an empty class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Gets a field by its display name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the identifiers of the classes this class depends on.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|f| f.nested_class.as_deref())
    }
}

/// A single field of a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    /// Key as it appears in the JSON sample.
    pub key: String,
    /// lowerCamelCase display name derived from the key.
    pub name: String,
    /// Declared type.
    pub ty: TypeLabel,
    /// Class generated for this field's value, if it was decomposed.
    pub nested_class: Option<String>,
}

impl FieldSchema {
    /// Creates a field with a plain inferred type.
    pub fn new(key: impl Into<String>, ty: TypeLabel) -> Self {
        let key = key.into();
        Self {
            name: to_camel_case(&key),
            key,
            ty,
            nested_class: None,
        }
    }

    /// Creates a field whose value was decomposed into `class`.
    ///
    /// `is_list` wraps the reference in a list type.
    pub fn nested(key: impl Into<String>, class: impl Into<String>, is_list: bool) -> Self {
        let class = class.into();
        let reference = TypeLabel::Class(class.clone());
        let ty = if is_list {
            TypeLabel::list_of(reference)
        } else {
            reference
        };
        let mut field = Self::new(key, ty);
        field.nested_class = Some(class);
        field
    }
}

/// Returns true if `name` can be used as a Dart class identifier.
#[must_use]
pub fn is_dart_identifier(name: &str) -> bool {
    DART_IDENTIFIER.is_match(name)
}

/// Converts a JSON key to lowerCamelCase.
///
/// Splits on `_` and capitalizes the first character of every segment except
/// the first. The first segment is left untouched.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, word) in s.split('_').enumerate() {
        if i == 0 {
            result.push_str(word);
        } else {
            result.push_str(&capitalize(word));
        }
    }
    result
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Uppercases the first character of a string.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Naive singularization: drops the trailing character.
///
/// `addresses` becomes `addresse`, `items` becomes `item`. Irregular plurals
/// are not handled.
#[must_use]
pub fn strip_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Returns the class name candidate for an object-valued field.
#[must_use]
pub fn object_class_candidate(display_name: &str) -> String {
    capitalize(display_name)
}

/// Returns the class name candidate for an array-of-objects field.
///
/// Falls back to the unstripped name when stripping would leave nothing.
#[must_use]
pub fn element_class_candidate(display_name: &str) -> String {
    let stripped = strip_last_char(display_name);
    if stripped.is_empty() {
        capitalize(display_name)
    } else {
        capitalize(stripped)
    }
}
