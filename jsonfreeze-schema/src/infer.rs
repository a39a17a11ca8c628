//! Type inference for JSON values.

use crate::types::TypeLabel;
use serde_json::{Number, Value};

/// Infers the type label of a JSON value.
///
/// Arrays are typed from their first element only; an empty array is
/// `List<dynamic>`. Objects reached here are plain maps: the walker decides
/// separately which objects become classes.
#[must_use]
pub fn infer(value: &Value) -> TypeLabel {
    match value {
        Value::Null => TypeLabel::Dynamic,
        Value::Bool(_) => TypeLabel::Bool,
        Value::Number(n) => infer_number(n),
        Value::String(_) => TypeLabel::String,
        Value::Array(items) => match items.first() {
            Some(first) => TypeLabel::list_of(crate::walker::with_stack(|| infer(first))),
            None => TypeLabel::list_of(TypeLabel::Dynamic),
        },
        Value::Object(_) => TypeLabel::Map,
    }
}

/// Infers `Int` for integral numbers and `Double` for everything else.
///
/// `1.0` counts as integral. Literals beyond the `f64` range (`1e400`) are
/// `Double`.
#[must_use]
pub fn infer_number(n: &Number) -> TypeLabel {
    if n.is_i64() || n.is_u64() {
        return TypeLabel::Int;
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => TypeLabel::Int,
        _ => TypeLabel::Double,
    }
}
