//! Parameter structs for all MCP tools.
//!
//! Field descriptions double as the user-facing tool schema documentation,
//! including the allowed-value lists the Graph API accepts.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

// ── list_campaigns / get_campaign ──

/// Parameters for the `list_campaigns` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListCampaignsParams {
    /// Ad account ID.
    #[schemars(description = "Ad account ID (e.g. act_123456789)")]
    pub account_id: String,
    /// Max campaigns to return.
    #[schemars(description = "Max campaigns to return (default 25)")]
    pub limit: Option<u32>,
}

/// Parameters for the `get_campaign` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCampaignParams {
    #[schemars(description = "Campaign ID")]
    pub campaign_id: String,
}

// ── create_campaign ──

/// Parameters for the `create_campaign` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCampaignParams {
    #[schemars(description = "Ad account ID (e.g. act_123456789)")]
    pub account_id: String,
    #[schemars(description = "Campaign name")]
    pub name: String,
    /// One of OUTCOME_AWARENESS, OUTCOME_ENGAGEMENT, OUTCOME_LEADS,
    /// OUTCOME_SALES, OUTCOME_TRAFFIC, OUTCOME_APP_PROMOTION.
    #[schemars(
        description = "Campaign objective: OUTCOME_AWARENESS, OUTCOME_ENGAGEMENT, OUTCOME_LEADS, OUTCOME_SALES, OUTCOME_TRAFFIC, or OUTCOME_APP_PROMOTION"
    )]
    pub objective: String,
    #[schemars(description = "Initial status: ACTIVE or PAUSED (default PAUSED)")]
    pub status: Option<String>,
    #[schemars(description = "Daily budget in cents (e.g. 5000 = $50.00)")]
    pub daily_budget: Option<u64>,
    #[schemars(description = "Lifetime budget in cents")]
    pub lifetime_budget: Option<u64>,
    #[schemars(
        description = "Bid strategy: LOWEST_COST_WITHOUT_CAP, LOWEST_COST_WITH_BID_CAP, COST_CAP, or LOWEST_COST_WITH_MIN_ROAS"
    )]
    pub bid_strategy: Option<String>,
    #[schemars(
        description = "Special ad categories required by Meta policy: NONE, EMPLOYMENT, HOUSING, CREDIT, ISSUES_ELECTIONS_POLITICS"
    )]
    pub special_ad_categories: Option<Vec<String>>,
}

// ── update_campaign ──

/// Parameters for the `update_campaign` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCampaignParams {
    #[schemars(description = "Campaign ID to update")]
    pub campaign_id: String,
    #[schemars(description = "New campaign name")]
    pub name: Option<String>,
    #[schemars(description = "New status: ACTIVE, PAUSED, DELETED, or ARCHIVED")]
    pub status: Option<String>,
    #[schemars(description = "New daily budget in cents")]
    pub daily_budget: Option<u64>,
    #[schemars(description = "New lifetime budget in cents")]
    pub lifetime_budget: Option<u64>,
    #[schemars(description = "New bid strategy")]
    pub bid_strategy: Option<String>,
}

// ── ad sets ──

/// Parameters for the `list_ad_sets` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListAdSetsParams {
    #[schemars(description = "Campaign ID or ad account ID to list ad sets from")]
    pub parent_id: String,
    #[schemars(description = "Max results (default 25)")]
    pub limit: Option<u32>,
}

/// Parameters for the `get_ad_set` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAdSetParams {
    #[schemars(description = "Ad set ID")]
    pub ad_set_id: String,
}

/// Parameters for the `create_ad_set` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateAdSetParams {
    #[schemars(description = "Ad account ID (e.g. act_123456789)")]
    pub account_id: String,
    #[schemars(description = "Ad set name")]
    pub name: String,
    #[schemars(description = "Parent campaign ID")]
    pub campaign_id: String,
    #[schemars(
        description = "When you get charged: IMPRESSIONS, LINK_CLICKS, POST_ENGAGEMENT, or THRUPLAY"
    )]
    pub billing_event: String,
    #[schemars(
        description = "What to optimize for: REACH, IMPRESSIONS, LINK_CLICKS, LANDING_PAGE_VIEWS, OFFSITE_CONVERSIONS, LEAD_GENERATION, APP_INSTALLS, VALUE, THRUPLAY, or POST_ENGAGEMENT"
    )]
    pub optimization_goal: String,
    #[schemars(description = "Daily budget in cents (required if the campaign has no budget)")]
    pub daily_budget: Option<u64>,
    #[schemars(description = "Lifetime budget in cents")]
    pub lifetime_budget: Option<u64>,
    #[schemars(description = "Bid cap in cents")]
    pub bid_amount: Option<u64>,
    #[schemars(description = "Bid strategy")]
    pub bid_strategy: Option<String>,
    /// Targeting spec: geo_locations, age_min/age_max, genders, interests,
    /// custom_audiences, publisher_platforms, etc.
    #[schemars(
        description = "Targeting spec object: geo_locations, age_min, age_max, genders, interests, custom_audiences, excluded_custom_audiences, publisher_platforms"
    )]
    pub targeting: Value,
    #[schemars(description = "Initial status: ACTIVE or PAUSED (default PAUSED)")]
    pub status: Option<String>,
    #[schemars(description = "Start time (ISO 8601)")]
    pub start_time: Option<String>,
    #[schemars(description = "End time (ISO 8601)")]
    pub end_time: Option<String>,
    #[schemars(
        description = "Promoted object (e.g. { pixel_id: '...', custom_event_type: 'PURCHASE' })"
    )]
    pub promoted_object: Option<Value>,
}

/// Parameters for the `update_ad_set` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateAdSetParams {
    #[schemars(description = "Ad set ID to update")]
    pub ad_set_id: String,
    #[schemars(description = "New name")]
    pub name: Option<String>,
    #[schemars(description = "New status: ACTIVE, PAUSED, DELETED, or ARCHIVED")]
    pub status: Option<String>,
    #[schemars(description = "New daily budget in cents")]
    pub daily_budget: Option<u64>,
    #[schemars(description = "New lifetime budget")]
    pub lifetime_budget: Option<u64>,
    #[schemars(description = "New bid cap")]
    pub bid_amount: Option<u64>,
    #[schemars(description = "New targeting spec")]
    pub targeting: Option<Value>,
    #[schemars(description = "New end time")]
    pub end_time: Option<String>,
}

// ── ads ──

/// Parameters for the `list_ads` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListAdsParams {
    #[schemars(description = "Ad set ID or campaign ID to list ads from")]
    pub parent_id: String,
    #[schemars(description = "Max results (default 25)")]
    pub limit: Option<u32>,
}

/// Parameters for the `create_ad` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateAdParams {
    #[schemars(description = "Ad account ID (e.g. act_123456789)")]
    pub account_id: String,
    #[schemars(description = "Ad name")]
    pub name: String,
    #[schemars(description = "Ad set to place this ad in")]
    pub adset_id: String,
    #[schemars(description = "Creative ID to use")]
    pub creative_id: String,
    #[schemars(description = "Initial status: ACTIVE or PAUSED (default PAUSED)")]
    pub status: Option<String>,
}

/// Parameters for the `update_ad` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateAdParams {
    #[schemars(description = "Ad ID to update")]
    pub ad_id: String,
    #[schemars(description = "New name")]
    pub name: Option<String>,
    #[schemars(description = "New status: ACTIVE, PAUSED, DELETED, or ARCHIVED")]
    pub status: Option<String>,
    #[schemars(description = "New creative ID")]
    pub creative_id: Option<String>,
}

// ── creatives ──

/// Parameters for the `list_creatives` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListCreativesParams {
    #[schemars(description = "Ad account ID")]
    pub account_id: String,
    #[schemars(description = "Max results (default 25)")]
    pub limit: Option<u32>,
}

/// Parameters for the `create_ad_creative` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateAdCreativeParams {
    #[schemars(description = "Ad account ID")]
    pub account_id: String,
    #[schemars(description = "Creative name")]
    pub name: String,
    /// Use `link_data` for image/link ads, `video_data` for video ads.
    #[schemars(
        description = "Creative spec with page_id plus link_data (image/link ads) or video_data (video ads)"
    )]
    pub object_story_spec: Value,
}

// ── audiences ──

/// Parameters for the `list_audiences` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListAudiencesParams {
    #[schemars(description = "Ad account ID")]
    pub account_id: String,
    #[schemars(description = "Max results (default 25)")]
    pub limit: Option<u32>,
}

/// Parameters for the `create_custom_audience` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCustomAudienceParams {
    #[schemars(description = "Ad account ID")]
    pub account_id: String,
    #[schemars(description = "Audience name")]
    pub name: String,
    #[schemars(description = "Audience description")]
    pub description: Option<String>,
    #[schemars(
        description = "Audience subtype: CUSTOM, WEBSITE, APP, OFFLINE, LOOKALIKE, or ENGAGEMENT"
    )]
    pub subtype: String,
    #[schemars(description = "Rule-based audience definition (for WEBSITE/APP subtypes)")]
    pub rule: Option<Value>,
    #[schemars(description = "Lookalike spec (for LOOKALIKE subtype)")]
    pub lookalike_spec: Option<Value>,
    #[schemars(
        description = "Data source for CUSTOM subtype: USER_PROVIDED_ONLY, PARTNER_PROVIDED_ONLY, or BOTH_USER_AND_PARTNER_PROVIDED"
    )]
    pub customer_file_source: Option<String>,
}

// ── get_insights ──

/// Parameters for the `get_insights` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetInsightsParams {
    #[schemars(description = "ID of campaign, ad set, ad, or ad account to get insights for")]
    pub object_id: String,
    #[schemars(
        description = "Date preset: today, yesterday, this_month, last_month, last_3d, last_7d, last_14d, last_28d, last_30d, or last_90d (default last_30d). Ignored if a time range is set."
    )]
    pub date_preset: Option<String>,
    #[schemars(description = "Start date (YYYY-MM-DD). Use with time_range_until.")]
    pub time_range_since: Option<String>,
    #[schemars(description = "End date (YYYY-MM-DD). Use with time_range_since.")]
    pub time_range_until: Option<String>,
    #[schemars(
        description = "Break results down by dimension: age, gender, country, region, dma, publisher_platform, platform_position, or device_platform"
    )]
    pub breakdowns: Option<String>,
    #[schemars(description = "Aggregation level: account, campaign, adset, or ad")]
    pub level: Option<String>,
    #[schemars(description = "Comma-separated fields to return (advanced)")]
    pub fields: Option<String>,
}

// ── ad library ──

/// Parameters for the `search_ad_library` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchAdLibraryParams {
    #[schemars(description = "Keywords to search for in ad content")]
    pub search_terms: Option<String>,
    #[schemars(description = "Specific Facebook Page IDs to search")]
    pub search_page_ids: Option<Vec<String>>,
    #[schemars(
        description = "Countries where ads were shown (ISO 2-letter codes, e.g. ['US','GB'])"
    )]
    pub ad_reached_countries: Vec<String>,
    #[schemars(description = "Filter by active status: ACTIVE, INACTIVE, or ALL (default ACTIVE)")]
    pub ad_active_status: Option<String>,
    #[schemars(description = "Filter by media type: ALL, IMAGE, MEME, VIDEO, or NONE")]
    pub media_type: Option<String>,
    #[schemars(description = "Max results (default 25)")]
    pub limit: Option<u32>,
}

/// Parameters for the `search_pages` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchPagesParams {
    #[schemars(description = "Brand or company name to search for")]
    pub query: String,
    #[schemars(description = "Max results (default 10)")]
    pub limit: Option<u32>,
}

/// Parameters for the `get_page_ads` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetPageAdsParams {
    #[schemars(description = "Facebook Page ID to get ads for")]
    pub page_id: String,
    #[schemars(description = "Countries (ISO 2-letter codes, e.g. ['US'])")]
    pub countries: Vec<String>,
    #[schemars(description = "Max results (default 25)")]
    pub limit: Option<u32>,
}
