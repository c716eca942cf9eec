//! Cross-platform metrics rollup interface.
//!
//! Each ad platform client implements [`AdPlatform`] so future cross-platform
//! rollup tools can aggregate spend and performance without knowing which
//! concrete platforms are configured. Meta is the only implementer today.

use async_trait::async_trait;
use serde::Serialize;

/// Per-campaign spend line inside a [`SpendSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignSpend {
    pub name: String,
    pub spend: f64,
    pub status: String,
}

/// Spend rollup across all accounts reachable with one credential.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendSummary {
    pub total_spend: f64,
    pub currency: String,
    pub campaigns: Vec<CampaignSpend>,
}

/// Account-level performance rollup for a date range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub impressions: u64,
    pub clicks: u64,
    pub spend: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<u64>,
}

/// Capability interface an ad platform must satisfy to participate in
/// cross-platform rollups.
///
/// Dates are `YYYY-MM-DD`. Implementations must never fail the whole
/// aggregate because a single account or campaign lookup failed; degraded
/// entries contribute zero.
#[async_trait]
pub trait AdPlatform: Send + Sync {
    /// Stable platform identifier (e.g. `"meta"`).
    fn name(&self) -> &'static str;

    async fn spend_summary(&self, start_date: &str, end_date: &str)
        -> anyhow::Result<SpendSummary>;

    async fn performance_summary(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> anyhow::Result<PerformanceSummary>;
}
