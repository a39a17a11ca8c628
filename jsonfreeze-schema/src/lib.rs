//! # jsonfreeze Schema
//!
//! JSON sample inference and class decomposition.
//!
//! This crate provides:
//! - JSON sample parsing with key order preserved
//! - Type inference for JSON values
//! - Collision-free class name allocation
//! - Recursive decomposition into a flat list of class schemas
//! - Intermediate representation validation

pub mod error;
pub mod infer;
pub mod ir;
pub mod naming;
pub mod parser;
pub mod types;
pub mod validation;
pub mod walker;

pub use error::{ParseError, SchemaError};
pub use infer::infer;
pub use ir::{ClassSchema, FieldSchema, SchemaIr};
pub use naming::NameAllocator;
pub use parser::{parse_json, parse_json_bytes};
pub use types::TypeLabel;
pub use validation::validate_classes;
pub use walker::SchemaWalker;
