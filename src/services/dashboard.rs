//! Dashboard data acquisition and derivation.
//!
//! The three upstream reads run concurrently and fail independently. Any
//! read that is unavailable degrades to defaults: numeric tiles show `0`
//! and charts fall back to a fixed sample series, labelled as such. A read
//! whose payload fails schema validation degrades the same way but also
//! leaves a notice on the affected panel.

use chrono::{DateTime, Utc};

use crate::errors::FetchError;
use crate::middleware::auth::CurrentUser;
use crate::models::analytics::AnalyticsSummary;
use crate::models::approval::{PendingDeal, PendingVendor};
use crate::models::dashboard::{
    Accent, ActivityItem, ActivityKind, ApprovalPanel, ApprovalRow, CategoryPoint, CityPoint,
    DashboardView, Series, StatTile, TrendPoint, Viewer,
};
use crate::services::format::{format_count, format_rupees};
use crate::upstream::UpstreamClient;

/// Points plotted on the city bar chart.
pub const CITY_CHART_LIMIT: usize = 6;

/// Points plotted on the category area chart.
pub const CATEGORY_CHART_LIMIT: usize = 8;

/// Rows previewed in each pending-approval panel.
pub const PENDING_PREVIEW_LIMIT: usize = 3;

const SAMPLE_CITIES: [(&str, u64, u64); 6] = [
    ("Mumbai", 120, 450),
    ("Delhi", 95, 380),
    ("Bangalore", 85, 320),
    ("Chennai", 70, 280),
    ("Hyderabad", 60, 240),
    ("Pune", 55, 200),
];

const SAMPLE_CATEGORIES: [(&str, u64, u64); 6] = [
    ("Fashion", 45, 38),
    ("Electronics", 32, 28),
    ("Food", 28, 25),
    ("Beauty", 22, 18),
    ("Home", 18, 15),
    ("Health", 15, 12),
];

const SAMPLE_TREND: [(&str, u64, u64, u64); 6] = [
    ("Jan", 1200, 450, 25000),
    ("Feb", 1800, 620, 35000),
    ("Mar", 2400, 780, 48000),
    ("Apr", 3200, 920, 62000),
    ("May", 4100, 1150, 78000),
    ("Jun", 4800, 1380, 92000),
];

/// Outcome of one upstream read after degradation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub value: Option<T>,
    /// Visible notice for a malformed payload.
    pub notice: Option<String>,
}

impl<T> Fetched<T> {
    pub fn ready(value: T) -> Self {
        Self {
            value: Some(value),
            notice: None,
        }
    }

    pub fn absent() -> Self {
        Self {
            value: None,
            notice: None,
        }
    }

    /// Collapse a fetch result into the default-value path.
    pub fn from_result(result: Result<Option<T>, FetchError>) -> Self {
        match result {
            Ok(value) => Self {
                value,
                notice: None,
            },
            Err(e) if e.is_malformed() => {
                tracing::warn!(error = %e, endpoint = e.endpoint(), "Malformed upstream response");
                Self {
                    value: None,
                    notice: Some(format!(
                        "Received a malformed response from {}; showing defaults.",
                        e.endpoint()
                    )),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, endpoint = e.endpoint(), "Upstream data unavailable");
                Self::absent()
            }
        }
    }
}

/// Raw inputs of one dashboard render.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub analytics: Fetched<AnalyticsSummary>,
    pub pending_vendors: Fetched<Vec<PendingVendor>>,
    pub pending_deals: Fetched<Vec<PendingDeal>>,
}

impl DashboardData {
    /// Nothing loaded: every panel renders its defaults.
    pub fn empty() -> Self {
        Self {
            analytics: Fetched::absent(),
            pending_vendors: Fetched::absent(),
            pending_deals: Fetched::absent(),
        }
    }
}

/// Issue the three upstream reads concurrently with the viewer's token.
pub async fn load(client: &UpstreamClient, viewer: &CurrentUser) -> DashboardData {
    let token = viewer.token.as_str();
    let (analytics, pending_vendors, pending_deals) = tokio::join!(
        client.load_analytics(token),
        client.load_pending_vendors(token),
        client.load_pending_deals(token),
    );

    DashboardData {
        analytics: Fetched::from_result(analytics),
        pending_vendors: Fetched::from_result(pending_vendors),
        pending_deals: Fetched::from_result(pending_deals),
    }
}

/// Build the complete view model for `viewer`.
pub fn compose(
    viewer: &CurrentUser,
    data: &DashboardData,
    generated_at: DateTime<Utc>,
) -> DashboardView {
    let summary = data.analytics.value.as_ref();
    let vendors = data.pending_vendors.value.as_deref().unwrap_or_default();
    let deals = data.pending_deals.value.as_deref().unwrap_or_default();

    let mut pending_vendors = vendor_panel(vendors);
    pending_vendors.notice = data.pending_vendors.notice.clone();
    let mut pending_deals = deal_panel(deals);
    pending_deals.notice = data.pending_deals.notice.clone();

    DashboardView {
        viewer: Viewer {
            username: viewer.username.clone(),
        },
        generated_at,
        stats: stat_tiles(summary),
        analytics_notice: data.analytics.notice.clone(),
        monthly_trend: monthly_trend(),
        city_performance: derive_city_stats(summary).truncated(CITY_CHART_LIMIT),
        category_performance: derive_category_stats(summary).truncated(CATEGORY_CHART_LIMIT),
        recent_activity: recent_activity(),
        pending_vendors,
        pending_deals,
    }
}

/// Four headline tiles. Missing counts show `0`.
pub fn stat_tiles(summary: Option<&AnalyticsSummary>) -> Vec<StatTile> {
    let count = |pick: fn(&AnalyticsSummary) -> Option<u64>| {
        format_count(summary.and_then(pick).unwrap_or(0))
    };
    let revenue = summary.and_then(|s| s.revenue_estimate).unwrap_or(0.0);

    vec![
        StatTile {
            title: "Total Users",
            value: count(|s| s.total_users),
            change: "+12%",
            accent: Accent::Primary,
        },
        StatTile {
            title: "Active Vendors",
            value: count(|s| s.total_vendors),
            change: "+8%",
            accent: Accent::Success,
        },
        StatTile {
            title: "Total Deals",
            value: count(|s| s.total_deals),
            change: "+15%",
            accent: Accent::Warning,
        },
        StatTile {
            title: "Revenue",
            value: format_rupees(revenue),
            change: "+22%",
            accent: Accent::Royal,
        },
    ]
}

/// Live city series when present and non-empty, otherwise the sample set.
pub fn derive_city_stats(summary: Option<&AnalyticsSummary>) -> Series<CityPoint> {
    match summary.and_then(|s| s.city_stats.as_deref()) {
        Some(stats) if !stats.is_empty() => Series::live(
            stats
                .iter()
                .map(|s| CityPoint {
                    name: s.city.clone(),
                    deals: s.deal_count,
                    users: s.user_count,
                })
                .collect(),
        ),
        _ => Series::sample(
            SAMPLE_CITIES
                .iter()
                .map(|&(name, deals, users)| CityPoint {
                    name: name.to_string(),
                    deals,
                    users,
                })
                .collect(),
        ),
    }
}

/// Live category series when present and non-empty, otherwise the sample set.
pub fn derive_category_stats(summary: Option<&AnalyticsSummary>) -> Series<CategoryPoint> {
    match summary.and_then(|s| s.category_stats.as_deref()) {
        Some(stats) if !stats.is_empty() => Series::live(
            stats
                .iter()
                .map(|s| CategoryPoint {
                    name: s.category.clone(),
                    deals: s.deal_count,
                    claims: s.claim_count,
                })
                .collect(),
        ),
        _ => Series::sample(
            SAMPLE_CATEGORIES
                .iter()
                .map(|&(name, deals, claims)| CategoryPoint {
                    name: name.to_string(),
                    deals,
                    claims,
                })
                .collect(),
        ),
    }
}

/// Six-month growth trend. The platform API exposes no trend data, so this
/// is always the sample series.
pub fn monthly_trend() -> Series<TrendPoint> {
    Series::sample(
        SAMPLE_TREND
            .iter()
            .map(|&(month, users, deals, revenue)| TrendPoint {
                month: month.to_string(),
                users,
                deals,
                revenue,
            })
            .collect(),
    )
}

/// Placeholder activity feed.
// TODO: replace with the platform audit feed once the API exposes one.
pub fn recent_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            id: 1,
            kind: ActivityKind::DealApproved,
            title: "Deal approved",
            description: "Fashion Hub submitted new winter sale",
            time: "2 hours ago",
        },
        ActivityItem {
            id: 2,
            kind: ActivityKind::VendorRegistered,
            title: "New vendor registered",
            description: "TechZone Electronics from Mumbai",
            time: "4 hours ago",
        },
        ActivityItem {
            id: 3,
            kind: ActivityKind::HelpTicket,
            title: "Help ticket submitted",
            description: "User reported payment issue",
            time: "6 hours ago",
        },
    ]
}

pub fn vendor_panel(vendors: &[PendingVendor]) -> ApprovalPanel {
    approval_panel(
        "Pending Vendor Approvals",
        "/admin/vendors",
        "No pending vendor approvals",
        vendors.len(),
        vendors.iter().map(|v| ApprovalRow {
            id: v.id.to_string(),
            heading: v.business_name.clone(),
            detail: v.location(),
        }),
    )
}

pub fn deal_panel(deals: &[PendingDeal]) -> ApprovalPanel {
    approval_panel(
        "Pending Deal Approvals",
        "/admin/deals",
        "No pending deal approvals",
        deals.len(),
        deals.iter().map(|d| ApprovalRow {
            id: d.id.to_string(),
            heading: d.title.clone(),
            detail: d.byline(),
        }),
    )
}

fn approval_panel(
    title: &'static str,
    view_all_href: &'static str,
    empty_message: &'static str,
    total: usize,
    rows: impl Iterator<Item = ApprovalRow>,
) -> ApprovalPanel {
    let overflow_label = (total > PENDING_PREVIEW_LIMIT)
        .then(|| format!("+{} more pending approvals", total - PENDING_PREVIEW_LIMIT));

    ApprovalPanel {
        title,
        view_all_href,
        total,
        rows: rows.take(PENDING_PREVIEW_LIMIT).collect(),
        overflow_label,
        empty_message,
        notice: None,
    }
}
