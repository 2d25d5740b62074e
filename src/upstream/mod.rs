//! HTTP client for the platform API that owns analytics and approvals.

pub mod cache;

use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::errors::FetchError;
use crate::models::analytics::AnalyticsSummary;
use crate::models::approval::{PendingDeal, PendingVendor};
use cache::ResponseCache;

/// Platform analytics summary.
pub const ANALYTICS: &str = "/api/admin/analytics";
/// Vendors awaiting approval, in server order.
pub const PENDING_VENDORS: &str = "/api/admin/vendors/pending";
/// Deals awaiting approval, in server order.
pub const PENDING_DEALS: &str = "/api/admin/deals/pending";

/// Read-only client for the upstream admin API.
///
/// Cheap to clone; clones share the connection pool and response cache.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    cache: Arc<ResponseCache>,
}

impl UpstreamClient {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.upstream_api_url.trim_end_matches('/').to_string(),
            cache: Arc::new(ResponseCache::new(config.cache_ttl())),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/admin/analytics`.
    pub async fn load_analytics(
        &self,
        token: &str,
    ) -> Result<Option<AnalyticsSummary>, FetchError> {
        self.get_json(ANALYTICS, token).await
    }

    /// `GET /api/admin/vendors/pending`.
    pub async fn load_pending_vendors(
        &self,
        token: &str,
    ) -> Result<Option<Vec<PendingVendor>>, FetchError> {
        self.get_json(PENDING_VENDORS, token).await
    }

    /// `GET /api/admin/deals/pending`.
    pub async fn load_pending_deals(
        &self,
        token: &str,
    ) -> Result<Option<Vec<PendingDeal>>, FetchError> {
        self.get_json(PENDING_DEALS, token).await
    }

    /// Check that the upstream answers HTTP at all, whatever the status.
    pub async fn ping(&self) -> Result<u16, reqwest::Error> {
        let response = self.client.get(&self.base_url).send().await?;
        Ok(response.status().as_u16())
    }

    /// Fetch and decode `endpoint`. An empty body or JSON `null` is `None`.
    ///
    /// Only bodies that pass the schema are cached, so a malformed payload
    /// is retried on the next render.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        token: &str,
    ) -> Result<Option<T>, FetchError> {
        if let Some(body) = self.cache.get(endpoint).await {
            tracing::debug!(endpoint, "Upstream cache hit");
            return decode(endpoint, &body);
        }

        let body = self.fetch(endpoint, token).await?;
        let decoded = decode(endpoint, &body)?;
        self.cache.insert(endpoint, body).await;
        Ok(decoded)
    }

    async fn fetch(&self, endpoint: &'static str, token: &str) -> Result<Arc<[u8]>, FetchError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let unavailable = |source| FetchError::Unavailable { endpoint, source };

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(unavailable)?;
        tracing::debug!(endpoint, bytes = bytes.len(), "Fetched upstream resource");
        Ok(Arc::from(bytes.as_ref()))
    }
}

/// Decode a response body against its schema.
fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &[u8]) -> Result<Option<T>, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(body)
        .map_err(|source| FetchError::Malformed { endpoint, source })
}
