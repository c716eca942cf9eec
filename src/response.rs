//! Tool result envelopes.
//!
//! Every tool handler returns exactly one [`CallToolResult`] with a single
//! text content item. The host distinguishes success from failure solely via
//! the `is_error` flag, never by inspecting the payload shape.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{json, Value};

/// Wrap success data as a pretty-printed JSON text envelope.
pub fn success<T: Serialize>(data: &T) -> CallToolResult {
    let text = serde_json::to_string_pretty(data).unwrap_or_else(|e| {
        json!({ "error": format!("serialization failed: {e}") }).to_string()
    });
    CallToolResult::success(vec![Content::text(text)])
}

/// Wrap an error message as a `{"error": ...}` envelope with the error flag set.
pub fn error(message: impl Into<String>) -> CallToolResult {
    error_with(message, None)
}

/// Like [`error`], with an optional structured details payload.
pub fn error_with(message: impl Into<String>, details: Option<Value>) -> CallToolResult {
    let mut payload = json!({ "error": message.into() });
    if let Some(details) = details {
        payload["details"] = details;
    }
    let text = serde_json::to_string_pretty(&payload)
        .unwrap_or_else(|_| payload.to_string());
    CallToolResult::error(vec![Content::text(text)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope_text(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1, "expected exactly one content item");
        result
            .content
            .first()
            .and_then(|c| c.raw.as_text())
            .map(|t| t.text.as_str())
            .expect("expected text content")
    }

    #[test]
    fn test_success_round_trip() {
        let result = success(&json!({ "a": 1 }));
        assert_ne!(result.is_error, Some(true));

        let parsed: Value = serde_json::from_str(envelope_text(&result)).unwrap();
        assert_eq!(parsed, json!({ "a": 1 }));
    }

    #[test]
    fn test_error_round_trip() {
        let result = error("x");
        assert_eq!(result.is_error, Some(true));

        let parsed: Value = serde_json::from_str(envelope_text(&result)).unwrap();
        assert_eq!(parsed, json!({ "error": "x" }));
    }

    #[test]
    fn test_error_with_details() {
        let result = error_with("boom", Some(json!({ "status": 500 })));
        assert_eq!(result.is_error, Some(true));

        let parsed: Value = serde_json::from_str(envelope_text(&result)).unwrap();
        assert_eq!(parsed["error"], "boom");
        assert_eq!(parsed["details"]["status"], 500);
    }
}
