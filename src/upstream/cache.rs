//! In-process TTL cache of raw upstream response bodies, keyed by endpoint.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Debug)]
struct CachedBody {
    body: Arc<[u8]>,
    fetched_at: Instant,
}

/// Response cache shared by all clones of the upstream client.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<&'static str, CachedBody>>,
}

impl ResponseCache {
    /// A zero `ttl` disables caching entirely.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Fresh body for `endpoint`, if one was stored within the TTL.
    pub async fn get(&self, endpoint: &'static str) -> Option<Arc<[u8]>> {
        if !self.is_enabled() {
            return None;
        }
        let entries = self.entries.read().await;
        entries
            .get(endpoint)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.body))
    }

    pub async fn insert(&self, endpoint: &'static str, body: Arc<[u8]>) {
        if !self.is_enabled() {
            return;
        }
        let mut entries = self.entries.write().await;
        entries.insert(
            endpoint,
            CachedBody {
                body,
                fetched_at: Instant::now(),
            },
        );
    }
}
