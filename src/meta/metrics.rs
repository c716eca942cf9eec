//! Lenient numeric extraction from insight rows.
//!
//! The Graph API returns metrics as strings (`"spend": "123.45"`). During
//! fan-out aggregation a parse failure or an absent data point counts as
//! zero rather than failing the whole rollup.

use serde_json::Value;

/// Action types that count as a conversion in the `actions` breakdown.
const CONVERSION_ACTION_TYPES: &[&str] = &["offsite_conversion", "purchase"];

/// Read a floating-point metric (spend, rates) from an insight row.
pub fn float_metric(row: &Value, key: &str) -> f64 {
    row.get(key).and_then(as_f64).unwrap_or(0.0)
}

/// Read an integer metric (impressions, clicks) from an insight row.
pub fn count_metric(row: &Value, key: &str) -> u64 {
    row.get(key).and_then(as_u64).unwrap_or(0)
}

/// Derive the conversion count from the `actions` breakdown array.
///
/// Takes the first entry whose action type indicates an off-site conversion
/// or a purchase; absence means zero conversions.
pub fn conversion_count(row: &Value) -> u64 {
    row.get("actions")
        .and_then(Value::as_array)
        .and_then(|actions| {
            actions.iter().find(|action| {
                action
                    .get("action_type")
                    .and_then(Value::as_str)
                    .is_some_and(|t| CONVERSION_ACTION_TYPES.contains(&t))
            })
        })
        .and_then(|action| action.get("value").and_then(as_u64))
        .unwrap_or(0)
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    }
}
