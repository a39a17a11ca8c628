//! Dart code generation modules.

pub mod classes;
pub mod fields;
pub mod header;

pub use classes::ClassGenerator;
pub use fields::FieldGenerator;
pub use header::HeaderGenerator;
