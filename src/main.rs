//! Ads MCP Server
//!
//! Model Context Protocol server exposing Meta (Facebook/Instagram) ads
//! management — campaigns, ad sets, ads, creatives, audiences, insights,
//! and ad library research — to LLM agents over stdio.

use std::sync::Arc;

use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use ads_mcp::config::{self, AdsConfig};
use ads_mcp::meta::MetaClient;
use ads_mcp::platform::AdPlatform;
use ads_mcp::server::AdsMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ads_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = AdsConfig::from_env();
    let Some(meta_config) = config.meta.clone() else {
        tracing::error!(
            "No ad platforms configured. Set at least one access token:\n  {} - for Meta (Facebook/Instagram) ads",
            config::META_ACCESS_TOKEN_VAR
        );
        std::process::exit(1);
    };

    let meta = Arc::new(MetaClient::new(&meta_config)?);
    tracing::info!(api_version = %meta_config.api_version, "Meta platform enabled");

    // Rollup seam: additional platforms join here once configured.
    let platforms: Vec<Arc<dyn AdPlatform>> = vec![meta.clone()];
    let names: Vec<&str> = platforms.iter().map(|p| p.name()).collect();
    tracing::info!(platforms = ?names, "ads-mcp server ready (stdio transport)");

    let server = AdsMcpServer::new(meta);
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
