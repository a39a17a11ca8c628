//! Document generator.
//!
//! Renders a decomposed schema into one Dart source document: the header,
//! then every class root-first, separated by blank lines.

use crate::dart::{ClassGenerator, HeaderGenerator};
use crate::document::{DocumentWriter, GeneratedDocument};
use crate::options::GeneratorOptions;
use jsonfreeze_schema::SchemaIr;

/// Generator for a complete freezed model file.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    options: &'a GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, options: &'a GeneratorOptions) -> Self {
        Self { ir, options }
    }

    /// Generates the document and its class symbol table.
    #[must_use]
    pub fn generate(&self) -> GeneratedDocument {
        let mut writer = DocumentWriter::new();
        HeaderGenerator::new(self.options).generate(&mut writer);
        writer.push_str("\n\n");

        let classes = ClassGenerator::new(self.options.field_mode);
        for (i, class) in self.ir.classes.iter().enumerate() {
            if i > 0 {
                writer.push_str("\n");
            }
            classes.generate(&mut writer, class);
        }

        tracing::info!(
            file = %self.options.file_name(),
            classes = self.ir.len(),
            mode = %self.options.field_mode,
            "generated freezed model"
        );
        writer.finish(self.ir.class_names())
    }

    /// Generates only the document text.
    #[must_use]
    pub fn generate_text(&self) -> String {
        self.generate().into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FieldMode;
    use jsonfreeze_schema::parse_json;

    fn ir_for(json: &str, root: &str) -> SchemaIr {
        let value = parse_json(json).expect("Failed to parse");
        SchemaIr::from_json(&value, root)
    }

    #[test]
    fn test_generate_full_document() {
        let options = GeneratorOptions::builder()
            .file_base_name("user_profile")
            .build();
        let ir = ir_for(r#"{"id":1,"address":{"city":"X"}}"#, &options.root_class_name());
        let doc = Generator::new(&ir, &options).generate();

        let expected = "import 'package:freezed_annotation/freezed_annotation.dart';
part 'user_profile.freezed.dart';
part 'user_profile.g.dart';

@freezed
class UserProfile with _$UserProfile {
  const factory UserProfile({
    final int? id;
    final Address? address;
  }) = _UserProfile;

  factory UserProfile.fromJson(Map<String, dynamic> json) =>
      _$UserProfileFromJson(json);
}

@freezed
class Address with _$Address {
  const factory Address({
    final String? city;
  }) = _Address;

  factory Address.fromJson(Map<String, dynamic> json) =>
      _$AddressFromJson(json);
}
";
        assert_eq!(doc.text(), expected);
        assert_eq!(doc.class_names(), ["UserProfile", "Address"]);
    }

    #[test]
    fn test_required_mode_keeps_nullable_types() {
        let options = GeneratorOptions::builder()
            .field_mode(FieldMode::Required)
            .build();
        let ir = ir_for(r#"{"name":"a","score":1.5}"#, "Root");
        let text = Generator::new(&ir, &options).generate_text();

        assert!(text.contains("    required String? name;\n"));
        assert!(text.contains("    required double? score;\n"));
    }

    #[test]
    fn test_optional_mode_has_no_modifier() {
        let options = GeneratorOptions::builder()
            .field_mode(FieldMode::Optional)
            .build();
        let ir = ir_for(r#"{"ok":true}"#, "Root");
        let text = Generator::new(&ir, &options).generate_text();
        assert!(text.contains("\n    bool? ok;\n"));
    }

    #[test]
    fn test_symbols_match_text() {
        let options = GeneratorOptions::default();
        let ir = ir_for(
            r#"{"users":[{"detail":{"a":1}}],"detail":{"b":2}}"#,
            "Root",
        );
        let doc = Generator::new(&ir, &options).generate();
        assert_eq!(doc.class_names(), ["Root", "Detail2", "User", "Detail"]);
        for span in doc.symbols() {
            assert_eq!(&doc.text()[span.range()], span.class);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let options = GeneratorOptions::default();
        let json = r#"{"b":{"x":[{"y":null}]},"a":[1,2],"c":{"x":[{"y":1}]}}"#;
        let first = Generator::new(&ir_for(json, "Root"), &options).generate();
        let second = Generator::new(&ir_for(json, "Root"), &options).generate();
        assert_eq!(first, second);
    }
}
