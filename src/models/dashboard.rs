//! Display-ready view model for the admin dashboard.
//!
//! Serialized as-is by the JSON endpoint and rendered by the HTML view.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Whether a chart series comes from live analytics or from the built-in
/// illustrative sample set.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeriesSource {
    Live,
    Sample,
}

/// Chart series tagged with its provenance.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series<T> {
    pub source: SeriesSource,
    pub points: Vec<T>,
}

impl<T> Series<T> {
    pub fn live(points: Vec<T>) -> Self {
        Self {
            source: SeriesSource::Live,
            points,
        }
    }

    pub fn sample(points: Vec<T>) -> Self {
        Self {
            source: SeriesSource::Sample,
            points,
        }
    }

    pub fn is_sample(&self) -> bool {
        self.source == SeriesSource::Sample
    }

    /// Keep only the first `limit` points.
    pub fn truncated(mut self, limit: usize) -> Self {
        self.points.truncate(limit);
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityPoint {
    pub name: String,
    pub deals: u64,
    pub users: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryPoint {
    pub name: String,
    pub deals: u64,
    pub claims: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub users: u64,
    pub deals: u64,
    pub revenue: u64,
}

/// Colour family used for a tile or feed icon.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Primary,
    Success,
    Warning,
    Royal,
}

impl Accent {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Primary => "accent-primary",
            Self::Success => "accent-success",
            Self::Warning => "accent-warning",
            Self::Royal => "accent-royal",
        }
    }
}

/// Headline metric card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatTile {
    pub title: &'static str,
    pub value: String,
    /// Literal month-over-month annotation; not computed from data.
    pub change: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    DealApproved,
    VendorRegistered,
    HelpTicket,
}

impl ActivityKind {
    pub fn accent(self) -> Accent {
        match self {
            Self::DealApproved => Accent::Success,
            Self::VendorRegistered => Accent::Primary,
            Self::HelpTicket => Accent::Warning,
        }
    }
}

/// Entry of the recent-activity feed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityItem {
    pub id: u32,
    pub kind: ActivityKind,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

/// Single row of a pending-approval panel.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApprovalRow {
    pub id: String,
    pub heading: String,
    pub detail: String,
}

/// Pending-approval panel truncated to a short preview.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApprovalPanel {
    pub title: &'static str,
    pub view_all_href: &'static str,
    pub total: usize,
    pub rows: Vec<ApprovalRow>,
    /// `+N more pending approvals` when `total` exceeds the preview.
    pub overflow_label: Option<String>,
    pub empty_message: &'static str,
    pub notice: Option<String>,
}

impl ApprovalPanel {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Identity the dashboard was rendered for.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Viewer {
    pub username: String,
}

/// Everything the dashboard page displays.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub viewer: Viewer,
    pub generated_at: DateTime<Utc>,
    pub stats: Vec<StatTile>,
    /// Set when the analytics payload failed schema validation.
    pub analytics_notice: Option<String>,
    pub monthly_trend: Series<TrendPoint>,
    pub city_performance: Series<CityPoint>,
    pub category_performance: Series<CategoryPoint>,
    pub recent_activity: Vec<ActivityItem>,
    pub pending_vendors: ApprovalPanel,
    pub pending_deals: ApprovalPanel,
}
