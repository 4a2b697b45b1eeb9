//! Relation normalizer
//!
//! Fetched entities embed relations as objects (`{"id": 7, "title": "Bachelor"}`),
//! forms hold bare ids.

use serde_json::Value;

/// Collapse relation objects to their id; lists are normalized element-wise.
pub fn to_form_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => match map.get("id") {
            Some(id) => id.clone(),
            None => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(to_form_value).collect()),
        other => other.clone(),
    }
}

/// Ids are sent back as-is.
pub fn to_payload_value(value: &Value) -> Value {
    value.clone()
}

/// Integer id from a normalized value; numeric strings are accepted
pub fn as_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_collapses_to_id() {
        assert_eq!(to_form_value(&json!({"id": 7, "title": "Bachelor"})), json!(7));
        assert_eq!(
            to_form_value(&json!([{"id": 1, "name": "A"}, 2, {"id": 3}])),
            json!([1, 2, 3])
        );
        assert_eq!(to_form_value(&json!("free text")), json!("free text"));
        assert_eq!(to_form_value(&json!(null)), json!(null));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let samples = [
            json!({"id": 7, "title": "Bachelor"}),
            json!([{"id": 1}, {"id": 2, "name": "x"}]),
            json!({"name": "no id here"}),
            json!(42),
            json!([]),
        ];
        for sample in samples {
            let once = to_form_value(&sample);
            assert_eq!(to_form_value(&once), once);
            assert_eq!(to_payload_value(&once), once);
        }
    }

    #[test]
    fn test_as_id() {
        assert_eq!(as_id(&json!(5)), Some(5));
        assert_eq!(as_id(&json!("12")), Some(12));
        assert_eq!(as_id(&json!("")), None);
        assert_eq!(as_id(&json!(null)), None);
    }
}
