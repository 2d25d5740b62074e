//! Platform analytics summary as served by `GET /api/admin/analytics`.

use serde::{Deserialize, Serialize};

/// Aggregate platform metrics computed by the backend.
///
/// Every field is optional on the wire. Absent fields are kept as `None`
/// so the view can tell "missing" apart from a real zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_users: Option<u64>,
    pub total_vendors: Option<u64>,
    pub total_deals: Option<u64>,
    pub revenue_estimate: Option<f64>,
    pub city_stats: Option<Vec<CityStat>>,
    pub category_stats: Option<Vec<CategoryStat>>,
}

/// Deal and user counts for a single city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStat {
    pub city: String,
    #[serde(default)]
    pub deal_count: u64,
    #[serde(default)]
    pub user_count: u64,
}

/// Deal and claim counts for a single deal category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: String,
    #[serde(default)]
    pub deal_count: u64,
    #[serde(default)]
    pub claim_count: u64,
}
