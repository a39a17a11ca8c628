//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use jsonfreeze::prelude::*;
//! ```

// Schema types
pub use jsonfreeze_schema::{
    ClassSchema, FieldSchema, NameAllocator, ParseError, SchemaError, SchemaIr, SchemaWalker,
    TypeLabel, infer, parse_json, validate_classes,
};

// Codegen types
pub use jsonfreeze_codegen::{
    CodegenError, FieldMode, GeneratedDocument, Generator, GeneratorBuilder, GeneratorOptions,
    SymbolKind, SymbolSpan, class_names_in, generate_from_file, generate_from_json,
    rename_in_text,
};
