//! In-process mock Graph API server for integration tests.
//!
//! Serves canned JSON responses keyed by request path and records every
//! request (method, query, body) for assertions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json};
use axum::Router;
use serde_json::{json, Value};

use ads_mcp::config::MetaConfig;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct MockState {
    responses: HashMap<String, (u16, Value)>,
    requests: Vec<RecordedRequest>,
}

pub struct MockGraph {
    state: Arc<Mutex<MockState>>,
    base_url: String,
}

impl MockGraph {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockState::default()));
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock graph listener");
        let addr = listener.local_addr().expect("mock graph local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock graph server");
        });

        Self {
            state,
            base_url: format!("http://{addr}"),
        }
    }

    /// Register a canned response for a full request path
    /// (e.g. `/v23.0/me/adaccounts`).
    pub fn respond(&self, path: &str, status: u16, body: Value) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), (status, body));
    }

    /// All requests received so far for the given path, in arrival order.
    pub fn requests_for(&self, path: &str) -> Vec<RecordedRequest> {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    /// Credential context pointing the client at this mock.
    pub fn config(&self) -> MetaConfig {
        MetaConfig {
            access_token: "test-token".to_string(),
            api_version: "v23.0".to_string(),
            base_url: self.base_url.clone(),
        }
    }
}

async fn handle(
    State(state): State<Arc<Mutex<MockState>>>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> impl IntoResponse {
    let path = uri.path().to_string();
    let body = serde_json::from_slice(&body).ok();

    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        query,
        body,
    });

    match state.responses.get(&path) {
        Some((status, value)) => (
            StatusCode::from_u16(*status).expect("valid mock status"),
            Json(value.clone()),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": {"code": 803, "message": format!("unknown path: {path}")}})),
        ),
    }
}
