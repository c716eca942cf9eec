//! MCP protocol integration test.
//!
//! Verifies the full protocol round-trip: tool discovery via `list_tools`,
//! tool invocation via `call_tool`, and error-envelope delivery when the
//! upstream Graph API rejects a request.

use std::sync::Arc;

use rmcp::model::{CallToolRequestParams, ClientInfo};
use rmcp::service::{RoleClient, RunningService};
use rmcp::{ClientHandler, ServiceExt};
use serde_json::json;

use ads_mcp::meta::MetaClient;
use ads_mcp::server::AdsMcpServer;

mod common;
use common::MockGraph;

#[derive(Debug, Clone, Default)]
struct DummyClient;

impl ClientHandler for DummyClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

async fn connect(
    mock: &MockGraph,
) -> anyhow::Result<(
    RunningService<RoleClient, DummyClient>,
    tokio::task::JoinHandle<anyhow::Result<()>>,
)> {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let meta = Arc::new(MetaClient::new(&mock.config())?);
    let server = AdsMcpServer::new(meta);
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient.serve(client_transport).await?;
    Ok((client, server_handle))
}

#[tokio::test]
async fn test_mcp_protocol_list_tools() -> anyhow::Result<()> {
    let mock = MockGraph::start().await;
    let (client, server_handle) = connect(&mock).await?;

    let tools = client.list_tools(None).await?;
    let tool_names: Vec<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();

    let expected = [
        "list_ad_accounts",
        "list_campaigns",
        "get_campaign",
        "create_campaign",
        "update_campaign",
        "list_ad_sets",
        "get_ad_set",
        "create_ad_set",
        "update_ad_set",
        "list_ads",
        "create_ad",
        "update_ad",
        "list_creatives",
        "create_ad_creative",
        "list_audiences",
        "create_custom_audience",
        "get_insights",
        "search_ad_library",
        "search_pages",
        "get_page_ads",
    ];
    for name in expected {
        assert!(
            tool_names.contains(&name),
            "Expected {name} in tool list, got: {tool_names:?}"
        );
    }
    assert_eq!(tool_names.len(), expected.len());

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_call_tool_success() -> anyhow::Result<()> {
    let mock = MockGraph::start().await;
    mock.respond(
        "/v23.0/act_1/campaigns",
        200,
        json!({"data": [{"id": "c1", "name": "Alpha", "status": "ACTIVE"}]}),
    );

    let (client, server_handle) = connect(&mock).await?;

    let result = client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: "list_campaigns".into(),
            arguments: Some(
                json!({ "account_id": "act_1" })
                    .as_object()
                    .unwrap()
                    .clone(),
            ),
            task: None,
        })
        .await?;

    assert_ne!(result.is_error, Some(true));
    let text = result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .expect("Expected text content");

    let parsed: serde_json::Value = serde_json::from_str(text)?;
    assert_eq!(parsed[0]["id"], "c1");
    assert_eq!(parsed[0]["name"], "Alpha");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_call_tool_error_envelope() -> anyhow::Result<()> {
    let mock = MockGraph::start().await;
    mock.respond(
        "/v23.0/me/adaccounts",
        400,
        json!({"error": {"code": 190, "message": "Invalid OAuth access token"}}),
    );

    let (client, server_handle) = connect(&mock).await?;

    let result = client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: "list_ad_accounts".into(),
            arguments: None,
            task: None,
        })
        .await?;

    assert_eq!(result.is_error, Some(true));
    let text = result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .expect("Expected text content");
    assert!(
        text.contains("Authentication error"),
        "Expected classified auth message, got: {text}"
    );

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_create_returns_id_envelope() -> anyhow::Result<()> {
    let mock = MockGraph::start().await;
    mock.respond("/v23.0/act_1/campaigns", 200, json!({"id": "c77"}));

    let (client, server_handle) = connect(&mock).await?;

    let result = client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: "create_campaign".into(),
            arguments: Some(
                json!({
                    "account_id": "act_1",
                    "name": "Spring Sale",
                    "objective": "OUTCOME_SALES"
                })
                .as_object()
                .unwrap()
                .clone(),
            ),
            task: None,
        })
        .await?;

    assert_ne!(result.is_error, Some(true));
    let text = result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .expect("Expected text content");
    let parsed: serde_json::Value = serde_json::from_str(text)?;
    assert_eq!(parsed["id"], "c77");
    assert_eq!(parsed["message"], "Campaign created");

    // The safety default made it to the wire even through the protocol layer.
    let body = mock.requests_for("/v23.0/act_1/campaigns")[0]
        .body
        .clone()
        .expect("POST body");
    assert_eq!(body["status"], "PAUSED");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}
