//! Total field coercion over untyped JSON.

use serde_json::{Map, Value};

type Object = Map<String, Value>;

/// Collection rows: a bare top-level array, or the array stored under `key` of
/// a top-level object. Anything else yields no rows.
pub fn rows<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(obj) => array(obj, key),
        _ => &[],
    }
}

/// The object elements of `rows(value, key)`; non-object rows are skipped.
pub fn objects<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Object> + 'a {
    rows(value, key).iter().filter_map(Value::as_object)
}

/// Object elements of a nested array field.
pub fn nested_objects<'a>(obj: &'a Object, key: &str) -> impl Iterator<Item = &'a Object> + 'a {
    array(obj, key).iter().filter_map(Value::as_object)
}

/// A finite number, else 0.
pub fn number(obj: &Object, key: &str) -> f64 {
    obj.get(key)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// A non-negative whole count. Fractions round to nearest, negatives clamp to 0.
pub fn count(obj: &Object, key: &str) -> u64 {
    to_count(number(obj, key))
}

pub fn to_count(n: f64) -> u64 {
    if n.is_finite() && n > 0.0 {
        n.round() as u64
    } else {
        0
    }
}

/// A string, else `""`.
pub fn string(obj: &Object, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

/// A boolean, else `false`.
pub fn flag(obj: &Object, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// An array, else empty.
pub fn array<'a>(obj: &'a Object, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Numeric elements of an array field; non-numbers become 0.
pub fn number_list(obj: &Object, key: &str) -> Vec<f64> {
    array(obj, key)
        .iter()
        .map(|v| v.as_f64().filter(|n| n.is_finite()).unwrap_or(0.0))
        .collect()
}

/// Boolean elements of an array field; non-booleans become `false`.
pub fn flag_list(obj: &Object, key: &str) -> Vec<bool> {
    array(obj, key)
        .iter()
        .map(|v| v.as_bool().unwrap_or(false))
        .collect()
}

/// Distinct string elements of an array field, in first-seen order.
pub fn string_set(obj: &Object, key: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for s in array(obj, key).iter().filter_map(Value::as_str) {
        if !out.iter().any(|existing| existing == s) {
            out.push(s.to_string());
        }
    }
    out
}
