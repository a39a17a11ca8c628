//! # jsonfreeze Codegen
//!
//! Dart `freezed` model generation from JSON samples.
//!
//! This crate provides:
//! - Class, field and header rendering for freezed models
//! - Generator options with a builder
//! - A generated document that tracks every class reference
//! - Span-based and text-level class renaming

pub mod dart;
pub mod document;
pub mod error;
pub mod generator;
pub mod options;
pub mod rename;

pub use document::{GeneratedDocument, SymbolKind, SymbolSpan};
pub use error::CodegenError;
pub use generator::Generator;
pub use options::{FieldMode, GeneratorBuilder, GeneratorOptions};
pub use rename::{class_names_in, rename_in_text};

use jsonfreeze_schema::SchemaIr;

/// Generates a freezed model file from a JSON sample.
///
/// # Arguments
/// * `json` - JSON sample text
/// * `options` - File base name, field mode and header settings
///
/// # Returns
/// The generated document with its class names, root first.
///
/// Keys or base names that do not form Dart identifiers (`""`, `"_"`) are
/// still emitted as-is, with a warning.
///
/// # Errors
/// Returns `CodegenError` if the input is empty or is not valid JSON. Nothing
/// is generated in that case.
pub fn generate_from_json(
    json: &str,
    options: &GeneratorOptions,
) -> Result<GeneratedDocument, CodegenError> {
    let value = jsonfreeze_schema::parse_json(json)?;
    let ir = SchemaIr::from_json(&value, &options.root_class_name());
    if let Err(e) = jsonfreeze_schema::validate_classes(&ir) {
        tracing::warn!(error = %e, "generated classes will not compile as Dart");
    }
    let generator = Generator::new(&ir, options);
    Ok(generator.generate())
}

/// Generates a freezed model file from a JSON sample file.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: &GeneratorOptions,
) -> Result<GeneratedDocument, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn options(base: &str, mode: FieldMode) -> GeneratorOptions {
        GeneratorOptions::builder()
            .file_base_name(base)
            .field_mode(mode)
            .build()
    }

    #[test]
    fn test_user_profile_example() {
        let doc = generate_from_json(
            r#"{"id":1,"address":{"city":"X"}}"#,
            &options("user_profile", FieldMode::Final),
        )
        .expect("generate");

        assert_eq!(doc.class_names(), ["UserProfile", "Address"]);
        assert!(doc.text().starts_with(
            "import 'package:freezed_annotation/freezed_annotation.dart';\n\
             part 'user_profile.freezed.dart';\n\
             part 'user_profile.g.dart';\n"
        ));
        let root = doc.text().find("class UserProfile").expect("root class");
        let nested = doc.text().find("class Address").expect("nested class");
        assert!(root < nested);
        assert!(doc.text().contains("    final int? id;\n"));
        assert!(doc.text().contains("    final Address? address;\n"));
        assert!(doc.text().contains("    final String? city;\n"));
    }

    #[test]
    fn test_primitive_list_example() {
        let doc = generate_from_json(r#"{"tags":["a","b"]}"#, &GeneratorOptions::default())
            .expect("generate");
        assert_eq!(doc.class_names(), ["YourNameModel"]);
        assert!(doc.text().contains("    final List<String>? tags;\n"));
    }

    #[test]
    fn test_object_list_example() {
        let doc = generate_from_json(r#"{"items":[{"sku":"A1"}]}"#, &GeneratorOptions::default())
            .expect("generate");
        assert_eq!(doc.class_names(), ["YourNameModel", "Item"]);
        assert!(doc.text().contains("    final List<Item>? items;\n"));
        assert!(doc.text().contains("    final String? sku;\n"));
    }

    #[test]
    fn test_invalid_json_generates_nothing() {
        let err = generate_from_json("{not json", &GeneratorOptions::default()).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(!err.is_missing_input());
        assert!(err.to_string().starts_with("invalid input"));
    }

    #[test]
    fn test_missing_input_is_distinct() {
        let err = generate_from_json("", &GeneratorOptions::default()).unwrap_err();
        assert!(err.is_missing_input());
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_generation_is_idempotent() {
        let json = r#"{"user":{"tags":[],"friends":[{"id":2.5}]},"n":null}"#;
        let opts = options("social", FieldMode::Required);
        let first = generate_from_json(json, &opts).expect("generate");
        let second = generate_from_json(json, &opts).expect("generate");
        assert_eq!(first.text(), second.text());
        assert_eq!(first.class_names(), second.class_names());
    }

    #[test]
    fn test_span_rename_updates_field_types() {
        let mut doc = generate_from_json(
            r#"{"address":{"city":"X"}}"#,
            &options("user_profile", FieldMode::Final),
        )
        .expect("generate");

        let rewritten = doc.rename_class("Address", "Location").expect("rename");
        assert_eq!(rewritten, 7);
        assert!(doc.text().contains("    final Location? address;\n"));
        assert!(doc.text().contains("_$LocationFromJson(json);"));
        assert_eq!(doc.class_names(), ["UserProfile", "Location"]);
        assert_eq!(class_names_in(doc.text()), doc.class_names());
    }

    #[test]
    fn test_span_rename_round_trip() {
        let original = generate_from_json(
            r#"{"user":{"a":1},"user_detail":{"user":{"b":true}}}"#,
            &GeneratorOptions::default(),
        )
        .expect("generate");

        let mut doc = original.clone();
        doc.rename_class("User", "Member").expect("rename");
        doc.rename_class("Member", "User").expect("rename");
        assert_eq!(doc, original);
    }

    #[test]
    fn test_deeply_nested_input_generates() {
        let depth = 300;
        let json = format!("{}1{}", r#"{"n":"#.repeat(depth), "}".repeat(depth));
        let doc = generate_from_json(&json, &GeneratorOptions::default()).expect("generate");
        assert_eq!(doc.class_names().len(), depth);
        assert!(doc.text().contains(&format!("class N{} with", depth - 1)));
    }

    #[test]
    fn test_out_of_range_number_is_double() {
        let doc = generate_from_json(r#"{"big":1e400}"#, &GeneratorOptions::default())
            .expect("generate");
        assert!(doc.text().contains("    final double? big;
"));
    }

    #[test]
    fn test_non_identifier_names_still_generate() {
        let doc = generate_from_json(r#"{"":{}}"#, &GeneratorOptions::default())
            .expect("generate");
        assert_eq!(doc.class_names(), ["YourNameModel", ""]);

        let doc = generate_from_json(r#"{"a":1}"#, &options("_", FieldMode::Final))
            .expect("generate");
        assert_eq!(doc.class_names(), [""]);
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(br#"{"total": 9.99}"#).expect("write");

        let doc = generate_from_file(file.path(), &GeneratorOptions::default()).expect("generate");
        assert!(doc.text().contains("    final double? total;\n"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = generate_from_file(&dir.path().join("absent.json"), &GeneratorOptions::default())
            .unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
