//! Deep JSON merge
//!
//! Destination wins every scalar or type collision. Objects merge key by
//! key (destination keys first, then source-only keys in source order).
//! Arrays either gain the source's unseen elements or stay as they are.

use std::collections::HashSet;
use std::num::FpCategory;

use serde_json::{Map, Number, Value};

/// Merge `source` into `dest`, returning the merged tree
///
/// # Arguments
/// * `dest` - Document that wins collisions
/// * `source` - Document supplying new keys and array elements
/// * `merge_arrays` - Append unseen source elements to arrays present in both
///
/// # Returns
/// A new value; neither input is modified.
#[must_use]
pub fn deep_merge(dest: &Value, source: &Value, merge_arrays: bool) -> Value {
    match (dest, source) {
        (Value::Array(dest_items), Value::Array(source_items)) => {
            if merge_arrays {
                Value::Array(merge_arrays_unique(dest_items, source_items))
            } else {
                dest.clone()
            }
        }
        (Value::Object(dest_map), Value::Object(source_map)) => {
            Value::Object(merge_objects(dest_map, source_map, merge_arrays))
        }
        // Scalar source, scalar destination or array/object mismatch
        _ => dest.clone(),
    }
}

fn merge_objects(dest: &Map<String, Value>, source: &Map<String, Value>, merge_arrays: bool) -> Map<String, Value> {
    let mut result = dest.clone();

    for (key, source_value) in source {
        let merged = match result.get(key) {
            Some(dest_value) => deep_merge(dest_value, source_value, merge_arrays),
            None => source_value.clone(),
        };
        result.insert(key.clone(), merged);
    }

    result
}

/// Append every source element not already present, by structural equality
#[must_use]
pub fn merge_arrays_unique(dest: &[Value], source: &[Value]) -> Vec<Value> {
    let mut seen: HashSet<String> = dest.iter().map(canonical_json).collect();
    let mut result = dest.to_vec();

    for item in source {
        if seen.insert(canonical_json(item)) {
            result.push(item.clone());
        }
    }

    result
}

/// Compact serialisation with object keys sorted at every level
///
/// Two values have the same canonical form exactly when they are equal as
/// JSON, regardless of key order or source formatting. Numbers compare by
/// value, so `1`, `1.0` and `1e0` are the same.
#[must_use]
pub fn canonical_json(value: &Value) -> String {
    sort_keys(value).to_string()
}

/// Integral floats become integers; other floats keep their shortest form
#[allow(clippy::cast_sign_loss)]
fn normalize_number(n: &Number) -> Number {
    let Some(f) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.clone();
    };
    if !matches!(f.fract().classify(), FpCategory::Zero) {
        return n.clone();
    }
    if (i64::MIN as f64..i64::MAX as f64).contains(&f) {
        Number::from(f as i64)
    } else if (0.0..u64::MAX as f64).contains(&f) {
        Number::from(f as u64)
    } else {
        n.clone()
    }
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let sorted: Map<String, Value> = keys
                .into_iter()
                .map(|k| (k.clone(), sort_keys(&map[k])))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        Value::Number(n) => Value::Number(normalize_number(n)),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_destination_wins_scalars() {
        let dest = json!({"a": 1, "b": "keep"});
        let source = json!({"a": 2, "c": true});
        assert_eq!(deep_merge(&dest, &source, true), json!({"a": 1, "b": "keep", "c": true}));
    }

    #[test]
    fn test_key_order_dest_then_source() {
        let dest = json!({"z": 1, "a": 1});
        let source = json!({"m": 1, "z": 2, "b": 1});
        let merged = deep_merge(&dest, &source, true);
        let keys: Vec<_> = merged.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m", "b"]);
    }

    #[test]
    fn test_nested_objects_merge() {
        let dest = json!({"components": {"minecraft:food": {"nutrition": 4}}});
        let source = json!({"components": {"minecraft:food": {"saturation": 1}, "minecraft:icon": "x"}});
        assert_eq!(
            deep_merge(&dest, &source, true),
            json!({"components": {"minecraft:food": {"nutrition": 4, "saturation": 1}, "minecraft:icon": "x"}})
        );
    }

    #[test]
    fn test_arrays_unique_append() {
        let dest = json!({"tags": ["a", {"x": 1, "y": 2}]});
        let source = json!({"tags": ["b", {"y": 2, "x": 1}, "a", "b"]});
        assert_eq!(
            deep_merge(&dest, &source, true),
            json!({"tags": ["a", {"x": 1, "y": 2}, "b"]})
        );
    }

    #[test]
    fn test_arrays_kept_without_flag() {
        let dest = json!({"modules": [{"type": "data"}]});
        let source = json!({"modules": [{"type": "resources"}]});
        assert_eq!(deep_merge(&dest, &source, false), dest);
    }

    #[test]
    fn test_type_mismatch_keeps_dest() {
        assert_eq!(deep_merge(&json!([1]), &json!({"a": 1}), true), json!([1]));
        assert_eq!(deep_merge(&json!({"a": 1}), &json!([1]), true), json!({"a": 1}));
        assert_eq!(deep_merge(&json!(null), &json!({"a": 1}), true), json!(null));
        assert_eq!(deep_merge(&json!({"a": 1}), &json!(null), true), json!({"a": 1}));
    }

    #[test]
    fn test_canonical_json_ignores_key_order() {
        let a: Value = serde_json::from_str(r#"{"b": [1, {"d": 1, "c": 2}], "a": null}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"a":null,"b":[1,{"c":2,"d":1}]}"#).unwrap();
        assert_eq!(canonical_json(&a), canonical_json(&b));
        assert_eq!(canonical_json(&a), r#"{"a":null,"b":[1,{"c":2,"d":1}]}"#);
    }

    #[test]
    fn test_canonical_json_compares_numbers_by_value() {
        let a: Value = serde_json::from_str(r#"{"damage": 1, "scale": 100, "speed": 0.5, "n": -3}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"damage": 1.0, "scale": 1e2, "speed": 5e-1, "n": -3.0}"#).unwrap();
        assert_eq!(canonical_json(&a), canonical_json(&b));
        assert_eq!(canonical_json(&b), r#"{"damage":1,"n":-3,"scale":100,"speed":0.5}"#);
        assert_eq!(canonical_json(&json!(10_000_000_000_000_000_000u64)), canonical_json(&json!(1e19)));
        assert_ne!(canonical_json(&json!(1)), canonical_json(&json!(1.5)));
    }

    #[test]
    fn test_arrays_unique_append_numbers_by_value() {
        let dest: Value = serde_json::from_str("[1, 2.5]").unwrap();
        let source: Value = serde_json::from_str("[1.0, 2.50, 1e0, 3]").unwrap();
        assert_eq!(deep_merge(&dest, &source, true), json!([1, 2.5, 3]));
    }
}
