//! Vendor and deal records awaiting administrator approval.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Record identifier as emitted by the backend: numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Vendor registration pending review (`GET /api/admin/vendors/pending`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingVendor {
    pub id: RecordId,
    pub business_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl PendingVendor {
    /// "City, State" with missing parts left blank.
    pub fn location(&self) -> String {
        format!(
            "{}, {}",
            self.city.as_deref().unwrap_or_default(),
            self.state.as_deref().unwrap_or_default()
        )
    }
}

/// Deal discount; some backends serialize decimals as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Percentage {
    Number(f64),
    Text(String),
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Owning vendor embedded in a pending deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealVendor {
    pub business_name: String,
}

/// Deal submission pending review (`GET /api/admin/deals/pending`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDeal {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub discount_percentage: Option<Percentage>,
    #[serde(default)]
    pub vendor: Option<DealVendor>,
}

impl PendingDeal {
    /// "By <vendor> - <discount>% off".
    pub fn byline(&self) -> String {
        let vendor = self
            .vendor
            .as_ref()
            .map(|v| v.business_name.as_str())
            .unwrap_or_default();
        let discount = self
            .discount_percentage
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        format!("By {vendor} - {discount}% off")
    }
}
