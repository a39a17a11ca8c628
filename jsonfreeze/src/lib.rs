//! # jsonfreeze
//!
//! Generate Dart `freezed` data classes from JSON samples.
//!
//! jsonfreeze infers field types from a sample document, splits nested objects
//! and arrays of objects into classes of their own, and renders one model file
//! with every class, root first.
//!
//! ## Features
//!
//! - **Value-driven inference** - `int`, `double`, `String`, `bool`, lists and maps
//! - **Nested decomposition** - each nested object becomes a named class
//! - **Collision-free names** - repeated names are numbered (`Address2`)
//! - **Field modes** - `final`, `required` or plain optional fields
//! - **Renaming** - rename a generated class everywhere it is referenced
//!
//! ## Quick Start
//!
//! ```
//! use jsonfreeze::prelude::*;
//!
//! let options = GeneratorOptions::builder()
//!     .file_base_name("user_profile")
//!     .field_mode(FieldMode::Final)
//!     .build();
//!
//! let mut doc = generate_from_json(r#"{"id":1,"address":{"city":"X"}}"#, &options)?;
//! assert_eq!(doc.class_names(), ["UserProfile", "Address"]);
//!
//! doc.rename_class("Address", "Location")?;
//! assert!(doc.text().contains("final Location? address;"));
//! # Ok::<(), jsonfreeze::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - JSON parsing, type inference and class decomposition
//! - [`codegen`] - Dart code generation and renaming

pub mod prelude;

/// JSON parsing, type inference and class decomposition.
pub mod schema {
    pub use jsonfreeze_schema::*;
}

/// Dart code generation and renaming.
pub mod codegen {
    pub use jsonfreeze_codegen::*;
}
