//! MCP ServerHandler implementation for Meta ads management.
//!
//! Exposes the Meta Graph API as named, schema-validated tools:
//!
//! **Accounts & structure**
//! - `list_ad_accounts` — List ad accounts reachable with the token
//! - `list_campaigns` / `get_campaign` / `create_campaign` / `update_campaign`
//! - `list_ad_sets` / `get_ad_set` / `create_ad_set` / `update_ad_set`
//! - `list_ads` / `create_ad` / `update_ad`
//! - `list_creatives` / `create_ad_creative`
//! - `list_audiences` / `create_custom_audience`
//!
//! **Reporting & research**
//! - `get_insights` — Performance metrics for any ad object
//! - `search_ad_library` / `search_pages` / `get_page_ads` — Competitor research
//!
//! Every handler catches all client failures and converts them into an error
//! envelope via the classifier; nothing escapes to the host as a fault.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler};
use serde_json::{json, Map, Value};

use crate::meta::client::{
    AdLibraryQuery, CreativeRef, InsightsQuery, NewAd, NewAdSet, NewAudience, NewCampaign,
    NewCreative, TimeRange,
};
use crate::meta::{classify_api_error, MetaClient};
use crate::response::{error, success};
use crate::tools::*;

/// Ads MCP server handler. Holds the shared Graph API client; all other
/// state is per-invocation.
#[derive(Debug, Clone)]
pub struct AdsMcpServer {
    tool_router: ToolRouter<Self>,
    meta: Arc<MetaClient>,
}

impl AdsMcpServer {
    pub fn new(meta: Arc<MetaClient>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            meta,
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AdsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ads-mcp".to_string(),
                title: Some("Ads MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing Meta (Facebook/Instagram) ads management: \
                     campaigns, ad sets, ads, creatives, audiences, insights, and \
                     ad library research"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Manage Meta (Facebook/Instagram) advertising. \
                 Start with list_ad_accounts to find account IDs (act_...), then \
                 list_campaigns/list_ad_sets/list_ads to explore structure. \
                 Creation flow: create_campaign → create_ad_set → create_ad_creative → create_ad. \
                 New campaigns, ad sets, and ads default to PAUSED — set status ACTIVE \
                 explicitly to start delivery. Budgets are in cents. \
                 Use get_insights for performance metrics and search_pages → \
                 get_page_ads or search_ad_library for competitor research."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl AdsMcpServer {
    // ── Ad accounts ──

    #[tool(
        name = "list_ad_accounts",
        description = "List all Meta ad accounts accessible with your token"
    )]
    pub async fn list_ad_accounts(&self) -> Result<CallToolResult, ErrorData> {
        match self.meta.list_ad_accounts().await {
            Ok(list) => Ok(success(&list.data)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    // ── Campaigns ──

    #[tool(
        name = "list_campaigns",
        description = "List campaigns in a Meta ad account"
    )]
    pub async fn list_campaigns(
        &self,
        Parameters(params): Parameters<ListCampaignsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self
            .meta
            .list_campaigns(&params.account_id, params.limit)
            .await
        {
            Ok(list) => Ok(success(&list.data)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "get_campaign",
        description = "Get details for a specific Meta campaign"
    )]
    pub async fn get_campaign(
        &self,
        Parameters(params): Parameters<GetCampaignParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.meta.get_campaign(&params.campaign_id).await {
            Ok(campaign) => Ok(success(&campaign)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "create_campaign",
        description = "Create a new Meta ad campaign. Defaults to PAUSED status."
    )]
    pub async fn create_campaign(
        &self,
        Parameters(params): Parameters<CreateCampaignParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let campaign = NewCampaign {
            name: params.name,
            objective: params.objective,
            status: params.status,
            special_ad_categories: params.special_ad_categories,
            daily_budget: params.daily_budget,
            lifetime_budget: params.lifetime_budget,
            bid_strategy: params.bid_strategy,
        };
        match self.meta.create_campaign(&params.account_id, campaign).await {
            Ok(created) => Ok(success(&json!({
                "id": created.get("id").cloned().unwrap_or(Value::Null),
                "message": "Campaign created",
            }))),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "update_campaign",
        description = "Update an existing Meta campaign (name, status, budget, etc.)"
    )]
    pub async fn update_campaign(
        &self,
        Parameters(params): Parameters<UpdateCampaignParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let mut body = Map::new();
        set_field(&mut body, "name", params.name);
        set_field(&mut body, "status", params.status);
        set_field(&mut body, "daily_budget", params.daily_budget);
        set_field(&mut body, "lifetime_budget", params.lifetime_budget);
        set_field(&mut body, "bid_strategy", params.bid_strategy);

        match self.meta.update_campaign(&params.campaign_id, body).await {
            Ok(outcome) => Ok(success(&json!({
                "success": outcome.get("success").cloned().unwrap_or(Value::Null),
                "message": "Campaign updated",
            }))),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    // ── Ad sets ──

    #[tool(
        name = "list_ad_sets",
        description = "List ad sets in a Meta campaign or ad account"
    )]
    pub async fn list_ad_sets(
        &self,
        Parameters(params): Parameters<ListAdSetsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.meta.list_ad_sets(&params.parent_id, params.limit).await {
            Ok(list) => Ok(success(&list.data)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "get_ad_set",
        description = "Get details for a specific Meta ad set including targeting"
    )]
    pub async fn get_ad_set(
        &self,
        Parameters(params): Parameters<GetAdSetParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.meta.get_ad_set(&params.ad_set_id).await {
            Ok(ad_set) => Ok(success(&ad_set)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "create_ad_set",
        description = "Create a new Meta ad set with targeting, budget, and optimization settings. Defaults to PAUSED."
    )]
    pub async fn create_ad_set(
        &self,
        Parameters(params): Parameters<CreateAdSetParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let ad_set = NewAdSet {
            name: params.name,
            campaign_id: params.campaign_id,
            billing_event: params.billing_event,
            optimization_goal: params.optimization_goal,
            daily_budget: params.daily_budget,
            lifetime_budget: params.lifetime_budget,
            bid_amount: params.bid_amount,
            bid_strategy: params.bid_strategy,
            targeting: params.targeting,
            status: params.status,
            start_time: params.start_time,
            end_time: params.end_time,
            promoted_object: params.promoted_object,
        };
        match self.meta.create_ad_set(&params.account_id, ad_set).await {
            Ok(created) => Ok(success(&json!({
                "id": created.get("id").cloned().unwrap_or(Value::Null),
                "message": "Ad set created",
            }))),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "update_ad_set",
        description = "Update an existing Meta ad set (targeting, budget, status, etc.)"
    )]
    pub async fn update_ad_set(
        &self,
        Parameters(params): Parameters<UpdateAdSetParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let mut body = Map::new();
        set_field(&mut body, "name", params.name);
        set_field(&mut body, "status", params.status);
        set_field(&mut body, "daily_budget", params.daily_budget);
        set_field(&mut body, "lifetime_budget", params.lifetime_budget);
        set_field(&mut body, "bid_amount", params.bid_amount);
        set_field(&mut body, "targeting", params.targeting);
        set_field(&mut body, "end_time", params.end_time);

        match self.meta.update_ad_set(&params.ad_set_id, body).await {
            Ok(outcome) => Ok(success(&json!({
                "success": outcome.get("success").cloned().unwrap_or(Value::Null),
                "message": "Ad set updated",
            }))),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    // ── Ads ──

    #[tool(name = "list_ads", description = "List ads in a Meta ad set or campaign")]
    pub async fn list_ads(
        &self,
        Parameters(params): Parameters<ListAdsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.meta.list_ads(&params.parent_id, params.limit).await {
            Ok(list) => Ok(success(&list.data)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "create_ad",
        description = "Create a new Meta ad linking an ad set to a creative. Defaults to PAUSED."
    )]
    pub async fn create_ad(
        &self,
        Parameters(params): Parameters<CreateAdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let ad = NewAd {
            name: params.name,
            adset_id: params.adset_id,
            creative: CreativeRef {
                creative_id: params.creative_id,
            },
            status: params.status,
        };
        match self.meta.create_ad(&params.account_id, ad).await {
            Ok(created) => Ok(success(&json!({
                "id": created.get("id").cloned().unwrap_or(Value::Null),
                "message": "Ad created",
            }))),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "update_ad",
        description = "Update an existing Meta ad (status, creative, name)"
    )]
    pub async fn update_ad(
        &self,
        Parameters(params): Parameters<UpdateAdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let mut body = Map::new();
        set_field(&mut body, "name", params.name);
        set_field(&mut body, "status", params.status);
        if let Some(creative_id) = params.creative_id {
            body.insert("creative".to_string(), json!({ "creative_id": creative_id }));
        }

        match self.meta.update_ad(&params.ad_id, body).await {
            Ok(outcome) => Ok(success(&json!({
                "success": outcome.get("success").cloned().unwrap_or(Value::Null),
                "message": "Ad updated",
            }))),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    // ── Creatives ──

    #[tool(
        name = "list_creatives",
        description = "List ad creatives in a Meta ad account"
    )]
    pub async fn list_creatives(
        &self,
        Parameters(params): Parameters<ListCreativesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self
            .meta
            .list_creatives(&params.account_id, params.limit)
            .await
        {
            Ok(list) => Ok(success(&list.data)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "create_ad_creative",
        description = "Create a new Meta ad creative with image/video and copy"
    )]
    pub async fn create_ad_creative(
        &self,
        Parameters(params): Parameters<CreateAdCreativeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let creative = NewCreative {
            name: params.name,
            object_story_spec: params.object_story_spec,
        };
        match self
            .meta
            .create_ad_creative(&params.account_id, creative)
            .await
        {
            Ok(created) => Ok(success(&json!({
                "id": created.get("id").cloned().unwrap_or(Value::Null),
                "message": "Creative created",
            }))),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    // ── Audiences ──

    #[tool(
        name = "list_audiences",
        description = "List custom and lookalike audiences in a Meta ad account"
    )]
    pub async fn list_audiences(
        &self,
        Parameters(params): Parameters<ListAudiencesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self
            .meta
            .list_audiences(&params.account_id, params.limit)
            .await
        {
            Ok(list) => Ok(success(&list.data)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "create_custom_audience",
        description = "Create a custom or lookalike audience in Meta"
    )]
    pub async fn create_custom_audience(
        &self,
        Parameters(params): Parameters<CreateCustomAudienceParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let audience = NewAudience {
            name: params.name,
            description: params.description,
            subtype: params.subtype,
            customer_file_source: params.customer_file_source,
            rule: params.rule,
            lookalike_spec: params.lookalike_spec,
        };
        match self
            .meta
            .create_custom_audience(&params.account_id, audience)
            .await
        {
            Ok(created) => Ok(success(&json!({
                "id": created.get("id").cloned().unwrap_or(Value::Null),
                "message": "Audience created",
            }))),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    // ── Insights ──

    #[tool(
        name = "get_insights",
        description = "Get performance metrics (impressions, clicks, spend, CPC, CTR, etc.) for a Meta campaign, ad set, ad, or account"
    )]
    pub async fn get_insights(
        &self,
        Parameters(params): Parameters<GetInsightsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let time_range = match (params.time_range_since, params.time_range_until) {
            (Some(since), Some(until)) => Some(TimeRange { since, until }),
            _ => None,
        };
        let query = InsightsQuery {
            date_preset: params.date_preset,
            time_range,
            breakdowns: params.breakdowns,
            level: params.level,
            fields: params.fields,
        };
        match self.meta.get_insights(&params.object_id, &query).await {
            Ok(rows) => Ok(success(&rows.data)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    // ── Ad library (competitor research) ──

    #[tool(
        name = "search_ad_library",
        description = "Search the Meta Ad Library for competitor ads by keyword, country, or page. Great for competitive research."
    )]
    pub async fn search_ad_library(
        &self,
        Parameters(params): Parameters<SearchAdLibraryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let query = AdLibraryQuery {
            search_terms: params.search_terms,
            search_page_ids: params.search_page_ids,
            ad_reached_countries: params.ad_reached_countries,
            ad_active_status: params.ad_active_status,
            media_type: params.media_type,
            limit: params.limit,
            ..AdLibraryQuery::default()
        };
        match self.meta.search_ad_library(&query).await {
            Ok(list) => Ok(success(&list.data)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "search_pages",
        description = "Search for Facebook Pages by brand/company name. Use this to find page IDs for ad library lookups."
    )]
    pub async fn search_pages(
        &self,
        Parameters(params): Parameters<SearchPagesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.meta.search_pages(&params.query, params.limit).await {
            Ok(list) => Ok(success(&list.data)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }

    #[tool(
        name = "get_page_ads",
        description = "Get all active ads for a specific Facebook Page. Use search_pages first to find the page ID."
    )]
    pub async fn get_page_ads(
        &self,
        Parameters(params): Parameters<GetPageAdsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self
            .meta
            .get_page_ads(&params.page_id, params.countries, params.limit)
            .await
        {
            Ok(list) => Ok(success(&list.data)),
            Err(e) => Ok(error(classify_api_error(&e))),
        }
    }
}
