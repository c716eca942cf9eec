//! Meta Graph API client.
//!
//! Sole point of contact with the Graph API: URL construction, token
//! authentication, transport, and one thin method per resource operation.
//! Success bodies are passed through as decoded JSON without shape
//! validation; non-2xx responses surface as [`MetaApiError::Request`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::MetaConfig;
use crate::meta::error::{classify_api_error, MetaApiError, MetaResult};
use crate::meta::metrics;
use crate::platform::{AdPlatform, CampaignSpend, PerformanceSummary, SpendSummary};

/// Bounded per-request timeout. The Graph API has no long-poll endpoints;
/// anything slower than this is a stuck connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default page size for list operations.
pub const DEFAULT_PAGE_SIZE: u32 = 25;
/// Page search uses a smaller default page.
pub const PAGE_SEARCH_PAGE_SIZE: u32 = 10;
/// New campaigns, ad sets, and ads start paused unless explicitly activated,
/// so a tool call can never start live ad spend by accident.
pub const DEFAULT_CREATE_STATUS: &str = "PAUSED";
/// Insights fall back to the trailing-30-day preset.
pub const DEFAULT_DATE_PRESET: &str = "last_30d";

const ACCOUNT_FIELDS: &str =
    "id,name,account_id,account_status,currency,timezone_name,balance,amount_spent";
const CAMPAIGN_LIST_FIELDS: &str = "id,name,status,objective,buying_type,daily_budget,\
     lifetime_budget,budget_remaining,start_time,stop_time,created_time,updated_time";
const CAMPAIGN_FIELDS: &str = "id,name,status,objective,buying_type,daily_budget,\
     lifetime_budget,budget_remaining,start_time,stop_time,bid_strategy,\
     special_ad_categories,created_time,updated_time";
const AD_SET_LIST_FIELDS: &str = "id,name,status,daily_budget,lifetime_budget,bid_amount,\
     billing_event,optimization_goal,targeting,start_time,end_time,created_time";
const AD_SET_FIELDS: &str = "id,name,status,campaign_id,daily_budget,lifetime_budget,\
     bid_amount,bid_strategy,billing_event,optimization_goal,targeting,promoted_object,\
     start_time,end_time,created_time,updated_time";
const AD_FIELDS: &str = "id,name,status,adset_id,campaign_id,creative,created_time,updated_time";
const CREATIVE_FIELDS: &str = "id,name,status,title,body,image_url,thumbnail_url,\
     object_story_spec,call_to_action_type,link_url";
const AUDIENCE_FIELDS: &str = "id,name,description,subtype,approximate_count,data_source,\
     delivery_status,operation_status";
const INSIGHT_FIELDS: &str =
    "impressions,clicks,spend,cpc,cpm,ctr,reach,frequency,actions,cost_per_action_type";
const AD_LIBRARY_FIELDS: &str = "id,ad_creative_bodies,ad_creative_link_titles,\
     ad_creative_link_captions,ad_delivery_start_time,ad_delivery_stop_time,page_id,\
     page_name,publisher_platforms,estimated_audience_size,impressions,spend";

// ── Request building ──────────────────────────────────────────────

/// Query-parameter set for one request. Entries with no value are dropped,
/// never serialized as empty strings.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub(crate) fn set_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Object list page as returned by Graph list endpoints. `data` entries are
/// opaque pass-through payloads; the paging cursor, when present, is exposed
/// to the caller for manual continuation.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ObjectList {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Value>,
}

/// Explicit reporting window, serialized as a JSON object query parameter.
#[derive(Debug, Clone, Serialize)]
pub struct TimeRange {
    pub since: String,
    pub until: String,
}

/// Insights request options. An explicit time range wins over any date
/// preset; with neither, the trailing-30-day preset applies.
#[derive(Debug, Default)]
pub struct InsightsQuery {
    pub date_preset: Option<String>,
    pub time_range: Option<TimeRange>,
    pub breakdowns: Option<String>,
    pub level: Option<String>,
    pub fields: Option<String>,
}

impl InsightsQuery {
    fn to_query(&self) -> MetaResult<Query> {
        let mut query = Query::new()
            .set("fields", self.fields.as_deref().unwrap_or(INSIGHT_FIELDS))
            .set_opt("level", self.level.as_deref())
            .set_opt("breakdowns", self.breakdowns.as_deref());

        if let Some(range) = &self.time_range {
            query = query.set("time_range", serde_json::to_string(range)?);
        } else {
            query = query.set(
                "date_preset",
                self.date_preset.as_deref().unwrap_or(DEFAULT_DATE_PRESET),
            );
        }
        Ok(query)
    }
}

/// Ad library search options. Country and page-id lists go over the wire as
/// JSON arrays in the query string.
#[derive(Debug, Default)]
pub struct AdLibraryQuery {
    pub search_terms: Option<String>,
    pub search_page_ids: Option<Vec<String>>,
    pub ad_reached_countries: Vec<String>,
    pub ad_active_status: Option<String>,
    pub ad_type: Option<String>,
    pub media_type: Option<String>,
    pub limit: Option<u32>,
    pub fields: Option<String>,
}

impl AdLibraryQuery {
    fn to_query(&self) -> MetaResult<Query> {
        let mut query = Query::new()
            .set_opt("search_terms", self.search_terms.as_deref())
            .set(
                "ad_reached_countries",
                serde_json::to_string(&self.ad_reached_countries)?,
            )
            .set(
                "ad_active_status",
                self.ad_active_status.as_deref().unwrap_or("ACTIVE"),
            )
            .set("ad_type", self.ad_type.as_deref().unwrap_or("ALL"))
            .set("fields", self.fields.as_deref().unwrap_or(AD_LIBRARY_FIELDS))
            .set("limit", self.limit.unwrap_or(DEFAULT_PAGE_SIZE));

        if let Some(page_ids) = &self.search_page_ids {
            query = query.set("search_page_ids", serde_json::to_string(page_ids)?);
        }
        query = query.set_opt("media_type", self.media_type.as_deref());
        Ok(query)
    }
}

// ── Create payloads ───────────────────────────────────────────────

/// Campaign creation body. Optional fields absent from the caller's input
/// are dropped from the outbound JSON.
#[derive(Debug, Serialize)]
pub struct NewCampaign {
    pub name: String,
    pub objective: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_ad_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_budget: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_budget: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_strategy: Option<String>,
}

/// Ad set creation body.
#[derive(Debug, Serialize)]
pub struct NewAdSet {
    pub name: String,
    pub campaign_id: String,
    pub billing_event: String,
    pub optimization_goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_budget: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_budget: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_strategy: Option<String>,
    pub targeting: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted_object: Option<Value>,
}

/// Ad creation body; links an ad set to a creative.
#[derive(Debug, Serialize)]
pub struct NewAd {
    pub name: String,
    pub adset_id: String,
    pub creative: CreativeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreativeRef {
    pub creative_id: String,
}

/// Ad creative creation body.
#[derive(Debug, Serialize)]
pub struct NewCreative {
    pub name: String,
    pub object_story_spec: Value,
}

/// Custom audience creation body.
#[derive(Debug, Serialize)]
pub struct NewAudience {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub subtype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_file_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookalike_spec: Option<Value>,
}

// ── Client ────────────────────────────────────────────────────────

/// Graph API client owning the credential context. Immutable after
/// construction; safe for unlimited concurrent use.
pub struct MetaClient {
    http: reqwest::Client,
    access_token: String,
    api_version: String,
    base_url: String,
}

impl std::fmt::Debug for MetaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetaClient")
            .field("access_token", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl MetaClient {
    pub fn new(config: &MetaConfig) -> MetaResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            access_token: config.access_token.clone(),
            api_version: config.api_version.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Perform one authenticated Graph API call.
    ///
    /// The access token is always a query parameter, on every method. A JSON
    /// body is attached only for POST. The response is decoded as JSON
    /// regardless of status; non-2xx becomes [`MetaApiError::Request`].
    async fn request(
        &self,
        endpoint: &str,
        method: Method,
        query: Query,
        body: Option<&Value>,
    ) -> MetaResult<Value> {
        let url = format!("{}/{}/{}", self.base_url, self.api_version, endpoint);
        tracing::debug!(%method, endpoint, "graph api request");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .query(&[("access_token", self.access_token.as_str())])
            .query(query.pairs());

        if let Some(body) = body {
            if method == Method::POST {
                builder = builder.json(body);
            }
        }

        let response = builder.send().await?;
        let status = response.status();
        let json: Value = response.json().await?;

        if !status.is_success() {
            return Err(MetaApiError::Request {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: json,
            });
        }
        Ok(json)
    }

    async fn get(&self, endpoint: &str, query: Query) -> MetaResult<Value> {
        self.request(endpoint, Method::GET, query, None).await
    }

    async fn get_list(&self, endpoint: &str, query: Query) -> MetaResult<ObjectList> {
        let raw = self.get(endpoint, query).await?;
        Ok(serde_json::from_value(raw)?)
    }

    async fn post(&self, endpoint: &str, body: Value) -> MetaResult<Value> {
        self.request(endpoint, Method::POST, Query::new(), Some(&body))
            .await
    }

    // ── Ad accounts ───────────────────────────────────────────────

    pub async fn list_ad_accounts(&self) -> MetaResult<ObjectList> {
        self.get_list("me/adaccounts", Query::new().set("fields", ACCOUNT_FIELDS))
            .await
    }

    // ── Campaigns ─────────────────────────────────────────────────

    pub async fn list_campaigns(
        &self,
        account_id: &str,
        limit: Option<u32>,
    ) -> MetaResult<ObjectList> {
        let query = Query::new()
            .set("fields", CAMPAIGN_LIST_FIELDS)
            .set("limit", limit.unwrap_or(DEFAULT_PAGE_SIZE));
        self.get_list(&format!("{account_id}/campaigns"), query).await
    }

    pub async fn get_campaign(&self, campaign_id: &str) -> MetaResult<Value> {
        self.get(campaign_id, Query::new().set("fields", CAMPAIGN_FIELDS))
            .await
    }

    pub async fn create_campaign(
        &self,
        account_id: &str,
        mut campaign: NewCampaign,
    ) -> MetaResult<Value> {
        campaign
            .status
            .get_or_insert_with(|| DEFAULT_CREATE_STATUS.to_string());
        // Meta policy requires the field to be present even when empty.
        campaign.special_ad_categories.get_or_insert_with(Vec::new);
        let body = serde_json::to_value(&campaign)?;
        self.post(&format!("{account_id}/campaigns"), body).await
    }

    pub async fn update_campaign(
        &self,
        campaign_id: &str,
        updates: Map<String, Value>,
    ) -> MetaResult<Value> {
        self.post(campaign_id, Value::Object(updates)).await
    }

    // ── Ad sets ───────────────────────────────────────────────────

    pub async fn list_ad_sets(
        &self,
        parent_id: &str,
        limit: Option<u32>,
    ) -> MetaResult<ObjectList> {
        let query = Query::new()
            .set("fields", AD_SET_LIST_FIELDS)
            .set("limit", limit.unwrap_or(DEFAULT_PAGE_SIZE));
        self.get_list(&format!("{parent_id}/adsets"), query).await
    }

    pub async fn get_ad_set(&self, ad_set_id: &str) -> MetaResult<Value> {
        self.get(ad_set_id, Query::new().set("fields", AD_SET_FIELDS))
            .await
    }

    pub async fn create_ad_set(&self, account_id: &str, mut ad_set: NewAdSet) -> MetaResult<Value> {
        ad_set
            .status
            .get_or_insert_with(|| DEFAULT_CREATE_STATUS.to_string());
        let body = serde_json::to_value(&ad_set)?;
        self.post(&format!("{account_id}/adsets"), body).await
    }

    pub async fn update_ad_set(
        &self,
        ad_set_id: &str,
        updates: Map<String, Value>,
    ) -> MetaResult<Value> {
        self.post(ad_set_id, Value::Object(updates)).await
    }

    // ── Ads ───────────────────────────────────────────────────────

    pub async fn list_ads(&self, parent_id: &str, limit: Option<u32>) -> MetaResult<ObjectList> {
        let query = Query::new()
            .set("fields", AD_FIELDS)
            .set("limit", limit.unwrap_or(DEFAULT_PAGE_SIZE));
        self.get_list(&format!("{parent_id}/ads"), query).await
    }

    pub async fn create_ad(&self, account_id: &str, mut ad: NewAd) -> MetaResult<Value> {
        ad.status
            .get_or_insert_with(|| DEFAULT_CREATE_STATUS.to_string());
        let body = serde_json::to_value(&ad)?;
        self.post(&format!("{account_id}/ads"), body).await
    }

    pub async fn update_ad(&self, ad_id: &str, updates: Map<String, Value>) -> MetaResult<Value> {
        self.post(ad_id, Value::Object(updates)).await
    }

    // ── Creatives ─────────────────────────────────────────────────

    pub async fn list_creatives(
        &self,
        account_id: &str,
        limit: Option<u32>,
    ) -> MetaResult<ObjectList> {
        let query = Query::new()
            .set("fields", CREATIVE_FIELDS)
            .set("limit", limit.unwrap_or(DEFAULT_PAGE_SIZE));
        self.get_list(&format!("{account_id}/adcreatives"), query)
            .await
    }

    pub async fn create_ad_creative(
        &self,
        account_id: &str,
        creative: NewCreative,
    ) -> MetaResult<Value> {
        let body = serde_json::to_value(&creative)?;
        self.post(&format!("{account_id}/adcreatives"), body).await
    }

    // ── Audiences ─────────────────────────────────────────────────

    pub async fn list_audiences(
        &self,
        account_id: &str,
        limit: Option<u32>,
    ) -> MetaResult<ObjectList> {
        let query = Query::new()
            .set("fields", AUDIENCE_FIELDS)
            .set("limit", limit.unwrap_or(DEFAULT_PAGE_SIZE));
        self.get_list(&format!("{account_id}/customaudiences"), query)
            .await
    }

    pub async fn create_custom_audience(
        &self,
        account_id: &str,
        audience: NewAudience,
    ) -> MetaResult<Value> {
        let body = serde_json::to_value(&audience)?;
        self.post(&format!("{account_id}/customaudiences"), body)
            .await
    }

    // ── Insights ──────────────────────────────────────────────────

    pub async fn get_insights(
        &self,
        object_id: &str,
        query: &InsightsQuery,
    ) -> MetaResult<ObjectList> {
        self.get_list(&format!("{object_id}/insights"), query.to_query()?)
            .await
    }

    // ── Ad library ────────────────────────────────────────────────

    pub async fn search_ad_library(&self, query: &AdLibraryQuery) -> MetaResult<ObjectList> {
        self.get_list("ads_archive", query.to_query()?).await
    }

    pub async fn search_pages(&self, query: &str, limit: Option<u32>) -> MetaResult<ObjectList> {
        let query = Query::new()
            .set("q", query)
            .set("limit", limit.unwrap_or(PAGE_SEARCH_PAGE_SIZE));
        self.get_list("pages/search", query).await
    }

    pub async fn get_page_ads(
        &self,
        page_id: &str,
        countries: Vec<String>,
        limit: Option<u32>,
    ) -> MetaResult<ObjectList> {
        let query = AdLibraryQuery {
            search_page_ids: Some(vec![page_id.to_string()]),
            ad_reached_countries: countries,
            limit,
            ..AdLibraryQuery::default()
        };
        self.search_ad_library(&query).await
    }

    // ── Metrics rollups ───────────────────────────────────────────

    /// Sequential fan-out: accounts → campaigns → per-campaign insights.
    ///
    /// A failed insights lookup for one campaign contributes zero spend and
    /// is still listed; it never fails the whole summary.
    pub async fn spend_summary(&self, start_date: &str, end_date: &str) -> MetaResult<SpendSummary> {
        let accounts = self.list_ad_accounts().await?;

        let mut total_spend = 0.0;
        let mut currency = "USD".to_string();
        let mut campaigns = Vec::new();

        for account in &accounts.data {
            currency = account
                .get("currency")
                .and_then(Value::as_str)
                .unwrap_or("USD")
                .to_string();
            let Some(account_id) = account.get("id").and_then(Value::as_str) else {
                continue;
            };

            let listing = self.list_campaigns(account_id, None).await?;
            for campaign in &listing.data {
                let name = campaign
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let status = campaign
                    .get("status")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();

                let spend = match campaign.get("id").and_then(Value::as_str) {
                    Some(campaign_id) => {
                        let query = InsightsQuery {
                            time_range: Some(TimeRange {
                                since: start_date.to_string(),
                                until: end_date.to_string(),
                            }),
                            ..InsightsQuery::default()
                        };
                        match self.get_insights(campaign_id, &query).await {
                            Ok(rows) => rows
                                .data
                                .first()
                                .map(|row| metrics::float_metric(row, "spend"))
                                .unwrap_or(0.0),
                            Err(e) => {
                                tracing::warn!(
                                    campaign_id,
                                    cause = %classify_api_error(&e),
                                    "campaign insights lookup failed, counting spend as zero"
                                );
                                0.0
                            }
                        }
                    }
                    None => 0.0,
                };

                total_spend += spend;
                campaigns.push(CampaignSpend { name, spend, status });
            }
        }

        Ok(SpendSummary {
            total_spend,
            currency,
            campaigns,
        })
    }

    /// Sequential fan-out over accounts, accumulating account-level insight
    /// totals. Accounts whose insights lookup fails are skipped.
    pub async fn performance_summary(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> MetaResult<PerformanceSummary> {
        let accounts = self.list_ad_accounts().await?;

        let mut impressions = 0u64;
        let mut clicks = 0u64;
        let mut spend = 0.0f64;
        let mut conversions = 0u64;

        for account in &accounts.data {
            let Some(account_id) = account.get("id").and_then(Value::as_str) else {
                continue;
            };

            let query = InsightsQuery {
                time_range: Some(TimeRange {
                    since: start_date.to_string(),
                    until: end_date.to_string(),
                }),
                level: Some("account".to_string()),
                ..InsightsQuery::default()
            };

            match self.get_insights(account_id, &query).await {
                Ok(rows) => {
                    if let Some(row) = rows.data.first() {
                        impressions += metrics::count_metric(row, "impressions");
                        clicks += metrics::count_metric(row, "clicks");
                        spend += metrics::float_metric(row, "spend");
                        conversions += metrics::conversion_count(row);
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        account_id,
                        cause = %classify_api_error(&e),
                        "account insights lookup failed, skipping in rollup"
                    );
                }
            }
        }

        Ok(PerformanceSummary {
            impressions,
            clicks,
            spend,
            conversions: Some(conversions),
        })
    }
}

#[async_trait]
impl AdPlatform for MetaClient {
    fn name(&self) -> &'static str {
        "meta"
    }

    async fn spend_summary(&self, start_date: &str, end_date: &str) -> anyhow::Result<SpendSummary> {
        Ok(MetaClient::spend_summary(self, start_date, end_date).await?)
    }

    async fn performance_summary(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> anyhow::Result<PerformanceSummary> {
        Ok(MetaClient::performance_summary(self, start_date, end_date).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &Query) -> Vec<(&str, &str)> {
        query
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn lookup<'a>(query: &'a Query, key: &str) -> Option<&'a str> {
        query
            .pairs()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_query_drops_absent_values() {
        let query = Query::new()
            .set("fields", "id,name")
            .set_opt("level", None::<&str>)
            .set_opt("limit", Some(5));
        assert_eq!(pairs(&query), vec![("fields", "id,name"), ("limit", "5")]);
    }

    #[test]
    fn test_insights_default_to_last_30_days() {
        let query = InsightsQuery::default().to_query().unwrap();
        assert_eq!(lookup(&query, "date_preset"), Some(DEFAULT_DATE_PRESET));
        assert_eq!(lookup(&query, "time_range"), None);
        assert_eq!(lookup(&query, "fields"), Some(INSIGHT_FIELDS));
    }

    #[test]
    fn test_insights_time_range_wins_over_preset() {
        let insights = InsightsQuery {
            date_preset: Some("last_7d".to_string()),
            time_range: Some(TimeRange {
                since: "2024-01-01".to_string(),
                until: "2024-01-31".to_string(),
            }),
            ..InsightsQuery::default()
        };
        let query = insights.to_query().unwrap();
        assert_eq!(lookup(&query, "date_preset"), None);
        assert_eq!(
            lookup(&query, "time_range"),
            Some(r#"{"since":"2024-01-01","until":"2024-01-31"}"#)
        );
    }

    #[test]
    fn test_insights_explicit_preset_passes_through() {
        let insights = InsightsQuery {
            date_preset: Some("last_7d".to_string()),
            ..InsightsQuery::default()
        };
        let query = insights.to_query().unwrap();
        assert_eq!(lookup(&query, "date_preset"), Some("last_7d"));
    }

    #[test]
    fn test_ad_library_defaults() {
        let search = AdLibraryQuery {
            ad_reached_countries: vec!["US".to_string(), "GB".to_string()],
            ..AdLibraryQuery::default()
        };
        let query = search.to_query().unwrap();
        assert_eq!(lookup(&query, "ad_reached_countries"), Some(r#"["US","GB"]"#));
        assert_eq!(lookup(&query, "ad_active_status"), Some("ACTIVE"));
        assert_eq!(lookup(&query, "ad_type"), Some("ALL"));
        assert_eq!(lookup(&query, "limit"), Some("25"));
        assert_eq!(lookup(&query, "search_page_ids"), None);
        assert_eq!(lookup(&query, "media_type"), None);
    }

    #[test]
    fn test_ad_library_page_ids_serialized_as_json() {
        let search = AdLibraryQuery {
            search_page_ids: Some(vec!["123".to_string()]),
            ad_reached_countries: vec!["US".to_string()],
            media_type: Some("VIDEO".to_string()),
            ..AdLibraryQuery::default()
        };
        let query = search.to_query().unwrap();
        assert_eq!(lookup(&query, "search_page_ids"), Some(r#"["123"]"#));
        assert_eq!(lookup(&query, "media_type"), Some("VIDEO"));
    }

    #[test]
    fn test_new_campaign_body_drops_absent_fields() {
        let campaign = NewCampaign {
            name: "Spring Sale".to_string(),
            objective: "OUTCOME_SALES".to_string(),
            status: Some(DEFAULT_CREATE_STATUS.to_string()),
            special_ad_categories: Some(Vec::new()),
            daily_budget: None,
            lifetime_budget: None,
            bid_strategy: None,
        };
        let body = serde_json::to_value(&campaign).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Spring Sale",
                "objective": "OUTCOME_SALES",
                "status": "PAUSED",
                "special_ad_categories": []
            })
        );
    }

    #[test]
    fn test_debug_redacts_access_token() {
        let client = MetaClient::new(&crate::config::MetaConfig {
            access_token: "super-secret".to_string(),
            api_version: "v23.0".to_string(),
            base_url: "https://graph.facebook.com".to_string(),
        })
        .unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
