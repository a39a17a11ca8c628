//! Freezed class code generation.

use crate::dart::fields::FieldGenerator;
use crate::document::{DocumentWriter, SymbolKind};
use crate::options::FieldMode;
use jsonfreeze_schema::ir::ClassSchema;

/// Generator for `@freezed` class definitions.
pub struct ClassGenerator {
    fields: FieldGenerator,
}

impl ClassGenerator {
    /// Creates a new class generator.
    #[must_use]
    pub const fn new(mode: FieldMode) -> Self {
        Self {
            fields: FieldGenerator::new(mode),
        }
    }

    /// Writes one class definition, ending with a newline.
    pub fn generate(&self, writer: &mut DocumentWriter, class: &ClassSchema) {
        let name = class.name.as_str();

        writer.push_str("@freezed\nclass ");
        writer.push_symbol(name, SymbolKind::Declaration);
        writer.push_str(" with _$");
        writer.push_symbol(name, SymbolKind::Mixin);
        writer.push_str(" {\n");

        // Constructor
        writer.push_str("  const factory ");
        writer.push_symbol(name, SymbolKind::Constructor);
        writer.push_str("({\n");
        for field in &class.fields {
            self.fields.generate(writer, field);
        }
        writer.push_str("  }) = _");
        writer.push_symbol(name, SymbolKind::BackingClass);
        writer.push_str(";\n\n");

        // Deserialization factory
        writer.push_str("  factory ");
        writer.push_symbol(name, SymbolKind::FromJsonFactory);
        writer.push_str(".fromJson(Map<String, dynamic> json) =>\n      _$");
        writer.push_symbol(name, SymbolKind::FromJsonHelper);
        writer.push_str("FromJson(json);\n}\n");
    }
}
