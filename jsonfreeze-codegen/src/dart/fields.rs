//! Field declaration code generation.

use crate::document::{DocumentWriter, SymbolKind};
use crate::options::FieldMode;
use jsonfreeze_schema::ir::FieldSchema;
use jsonfreeze_schema::types::TypeLabel;

/// Indentation of field lines inside the constructor parameter list.
const FIELD_INDENT: &str = "    ";

/// Generator for constructor field declarations.
pub struct FieldGenerator {
    mode: FieldMode,
}

impl FieldGenerator {
    /// Creates a new field generator.
    #[must_use]
    pub const fn new(mode: FieldMode) -> Self {
        Self { mode }
    }

    /// Writes one field line: `<modifier> <Type>? <name>;`.
    pub fn generate(&self, writer: &mut DocumentWriter, field: &FieldSchema) {
        writer.push_str(FIELD_INDENT);
        writer.push_str(self.mode.prefix());
        write_type(writer, &field.ty);
        writer.push_str("? ");
        writer.push_str(&field.name);
        writer.push_str(";\n");
    }
}

/// Writes a type expression, recording every class reference.
pub fn write_type(writer: &mut DocumentWriter, ty: &TypeLabel) {
    match ty {
        TypeLabel::List(element) => {
            writer.push_str("List<");
            write_type(writer, element);
            writer.push_str(">");
        }
        TypeLabel::Class(name) => writer.push_symbol(name, SymbolKind::FieldType),
        other => writer.push_str(&other.dart_type()),
    }
}
