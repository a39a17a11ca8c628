//! Synthetic JSON samples for benchmarks.

use serde_json::{Map, Value, json};

/// Builds an object with `width` scalar fields of mixed types.
#[must_use]
pub fn wide_object(width: usize) -> Value {
    let mut obj = Map::new();
    for i in 0..width {
        let value = match i % 5 {
            0 => json!(i),
            1 => json!(i as f64 + 0.5),
            2 => json!(format!("value_{i}")),
            3 => json!(i % 2 == 0),
            _ => Value::Null,
        };
        obj.insert(format!("field_{i}"), value);
    }
    Value::Object(obj)
}

/// Builds a chain of `depth` nested objects, each with a few scalar fields.
#[must_use]
pub fn deep_object(depth: usize) -> Value {
    let mut value = json!({"leaf_id": 1, "leaf_name": "end"});
    for level in 0..depth {
        value = json!({
            "level": level,
            "label": format!("level_{level}"),
            "child": value,
        });
    }
    value
}

/// Builds a document whose branches repeat the same keys, forcing numbered names.
#[must_use]
pub fn colliding_object(branches: usize) -> Value {
    let mut obj = Map::new();
    for i in 0..branches {
        obj.insert(
            format!("branch_{i}"),
            json!({
                "address": {"city": "X", "zip_code": "0"},
                "items": [{"sku": "A1", "qty": 2}],
            }),
        );
    }
    Value::Object(obj)
}

/// Serializes a sample to text.
#[must_use]
pub fn to_text(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonfreeze_schema::SchemaIr;

    #[test]
    fn test_wide_object_width() {
        assert_eq!(wide_object(10).as_object().map(Map::len), Some(10));
    }

    #[test]
    fn test_deep_object_class_count() {
        let ir = SchemaIr::from_json(&deep_object(8), "Root");
        assert_eq!(ir.len(), 9);
    }

    #[test]
    fn test_colliding_object_names_are_unique() {
        let ir = SchemaIr::from_json(&colliding_object(4), "Root");
        assert!(jsonfreeze_schema::validate_classes(&ir).is_ok());
        assert!(ir.get_class("Address4").is_some());
        assert!(ir.get_class("Item4").is_some());
    }
}
