//! Shared helper functions for MCP tool implementations.

use serde_json::{Map, Value};

/// Insert a field into a partial-update body only when the caller set it.
///
/// Update calls must only send fields the caller explicitly provided;
/// omitted fields must never overwrite remote state with null.
pub fn set_field(body: &mut Map<String, Value>, key: &str, value: Option<impl Into<Value>>) {
    if let Some(value) = value {
        body.insert(key.to_string(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_field_skips_absent_values() {
        let mut body = Map::new();
        set_field(&mut body, "name", Some("renamed"));
        set_field(&mut body, "status", None::<&str>);
        set_field(&mut body, "daily_budget", Some(5000u64));

        assert_eq!(
            Value::Object(body),
            json!({ "name": "renamed", "daily_budget": 5000 })
        );
    }

    #[test]
    fn test_set_field_accepts_nested_values() {
        let mut body = Map::new();
        set_field(&mut body, "targeting", Some(json!({ "age_min": 21 })));
        assert_eq!(Value::Object(body), json!({ "targeting": { "age_min": 21 } }));
    }
}
