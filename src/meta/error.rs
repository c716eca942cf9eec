//! Graph API failure types and error classification.

use serde_json::Value;
use thiserror::Error;

use crate::config::META_ACCESS_TOKEN_VAR;

/// Meta client operation result type.
pub type MetaResult<T> = Result<T, MetaApiError>;

/// Failure raised by a single Graph API call.
#[derive(Debug, Error)]
pub enum MetaApiError {
    /// Non-2xx response; carries the HTTP status and the raw decoded body.
    #[error("Meta API request failed: {endpoint}")]
    Request {
        endpoint: String,
        status: u16,
        body: Value,
    },

    /// Transport-level failure (connect, timeout, non-JSON body).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response decode failure for a typed payload.
    #[error("failed to decode Graph API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Turn a Graph API failure into one deterministic, user-actionable string.
///
/// Strict waterfall: a structured Graph error object wins, then the bare
/// HTTP status line, then the failure's own message.
pub fn classify_api_error(err: &MetaApiError) -> String {
    if let MetaApiError::Request { status, body, .. } = err {
        if let Some(graph) = body.get("error").filter(|e| e.is_object()) {
            return classify_graph_error(graph);
        }
        return format!("HTTP {status}: {err}");
    }
    err.to_string()
}

/// Map the Graph error-code table to canned guidance.
///
/// The code table (190 / 4,17 / 200,10 / 100) is closed and hand-maintained;
/// keep this an explicit match over integer codes.
fn classify_graph_error(graph: &Value) -> String {
    let code = graph.get("code").and_then(Value::as_i64);
    let subcode = graph.get("error_subcode").and_then(Value::as_i64);
    let message = graph
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error");
    let user_msg = graph.get("error_user_msg").and_then(Value::as_str);

    match code {
        Some(190) => {
            format!("Authentication error: {message}. Check your {META_ACCESS_TOKEN_VAR}.")
        }
        Some(4) | Some(17) => format!("Rate limit hit: {message}. Wait a moment and retry."),
        Some(200) | Some(10) => {
            format!("Permission error: {message}. Your token may lack required permissions.")
        }
        Some(100) => format!("Invalid parameter: {}", user_msg.unwrap_or(message)),
        _ => {
            let code = code.map(|c| c.to_string()).unwrap_or_default();
            let subcode = subcode
                .map(|s| format!(", subcode {s}"))
                .unwrap_or_default();
            format!(
                "Meta API error (code {code}{subcode}): {}",
                user_msg.unwrap_or(message)
            )
        }
    }
}
