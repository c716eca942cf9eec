//! Ads MCP Server library.
//!
//! Provides the [`AdsMcpServer`](server::AdsMcpServer) MCP server handler, the
//! [`MetaClient`](meta::MetaClient) Graph API client, and the tool parameter
//! types. Used by the `ads-mcp` binary and available for integration testing.

pub mod config;
pub mod meta;
pub mod platform;
pub mod response;
pub mod server;
pub mod tools;
