//! Recursive decomposition of JSON objects into class schemas.
//!
//! Nested objects and arrays whose first element is an object become classes
//! of their own. Every discovered class is pushed after its children, so the
//! accumulator ends root-last; [`SchemaWalker::finish`] reverses it.

use crate::infer::infer;
use crate::ir::{
    ClassSchema, FieldSchema, SchemaIr, element_class_candidate, is_dart_identifier,
    object_class_candidate, to_camel_case,
};
use crate::naming::NameAllocator;
use serde_json::{Map, Value};

/// Remaining stack below which recursion switches to a fresh segment.
const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each extra stack segment.
const STACK_SEGMENT: usize = 1024 * 1024;

/// Runs `f`, growing the stack first if it is close to exhausted.
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, f)
}

/// Builder that walks one JSON document.
///
/// Owns the name allocator and the class accumulator for exactly one run.
#[derive(Debug, Default)]
pub struct SchemaWalker {
    names: NameAllocator,
    classes: Vec<ClassSchema>,
}

impl SchemaWalker {
    /// Creates a walker with a fresh allocator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decomposes `obj` into a class named after `proposed_name`.
    ///
    /// Nested classes are appended to the accumulator before this one.
    pub fn decompose(&mut self, obj: &Map<String, Value>, proposed_name: &str) -> &ClassSchema {
        let name = self.names.allocate(proposed_name);
        tracing::debug!(candidate = proposed_name, class = %name, "decomposing object");
        if !is_dart_identifier(&name) {
            tracing::warn!(
                candidate = proposed_name,
                class = %name,
                "allocated class name is not a valid Dart identifier"
            );
        }

        let mut class = ClassSchema::new(name);
        for (key, value) in obj {
            let field = self.walk_field(key, value);
            tracing::trace!(class = %class.name, field = %field.name, ty = %field.ty, "field");
            class.fields.push(field);
        }

        self.classes.push(class);
        &self.classes[self.classes.len() - 1]
    }

    /// Types one key/value pair, recursing into nested objects.
    fn walk_field(&mut self, key: &str, value: &Value) -> FieldSchema {
        let display_name = to_camel_case(key);

        match value {
            Value::Object(nested) => {
                let candidate = object_class_candidate(&display_name);
                let class = with_stack(|| self.decompose(nested, &candidate).name.clone());
                FieldSchema::nested(key, class, false)
            }
            Value::Array(items) => match items.first() {
                Some(Value::Object(first)) => {
                    let candidate = element_class_candidate(&display_name);
                    let class = with_stack(|| self.decompose(first, &candidate).name.clone());
                    FieldSchema::nested(key, class, true)
                }
                _ => FieldSchema::new(key, infer(value)),
            },
            _ => FieldSchema::new(key, infer(value)),
        }
    }

    /// Returns the classes discovered so far, root-last.
    #[must_use]
    pub fn classes(&self) -> &[ClassSchema] {
        &self.classes
    }

    /// Consumes the walker, returning the classes root-first.
    #[must_use]
    pub fn finish(self) -> SchemaIr {
        let mut classes = self.classes;
        classes.reverse();
        SchemaIr { classes }
    }
}

impl SchemaIr {
    /// Decomposes a parsed JSON document under the given root class name.
    ///
    /// A top-level array is sampled through its first element. Roots that are
    /// not objects (scalars, empty arrays, arrays of scalars) yield a single
    /// field-less root class.
    #[must_use]
    pub fn from_json(value: &Value, root_name: &str) -> Self {
        let mut walker = SchemaWalker::new();

        let root = match value {
            Value::Object(obj) => Some(obj),
            Value::Array(items) => match items.first() {
                Some(Value::Object(first)) => Some(first),
                _ => None,
            },
            _ => None,
        };

        match root {
            Some(obj) => {
                walker.decompose(obj, root_name);
            }
            None => {
                tracing::warn!(
                    root = root_name,
                    ty = %infer(value),
                    "top-level value is not an object, emitting an empty root class"
                );
                walker.decompose(&Map::new(), root_name);
            }
        }

        let ir = walker.finish();
        tracing::debug!(classes = ir.len(), "decomposition finished");
        ir
    }
}
