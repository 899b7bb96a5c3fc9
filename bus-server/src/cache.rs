//! Caching layer for PTV departures responses.
//!
//! The arrival board polls every few seconds, but the upstream API
//! rate-limits per developer id. A single-slot cache holds the last
//! successful payload for a short TTL; concurrent misses coalesce into
//! one in-flight fetch rather than racing to the API.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache as MokaCache;

use crate::config::StopQuery;
use crate::ptv::{DeparturesResponse, PtvClient, PtvError};

/// Configuration for the departures cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum age at which a cached payload is still served.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_millis(25_000),
        }
    }
}

/// A cached departures payload with its fetch time.
#[derive(Debug, Clone)]
pub struct CachedDepartures {
    pub payload: DeparturesResponse,
    pub fetched_at: DateTime<Utc>,
}

/// PTV client with a single-slot TTL cache.
///
/// The deployment serves one fixed stop, so the cache is keyed by
/// unit; a fresh fetch supersedes the previous entry, which is never
/// explicitly invalidated.
pub struct CachedPtvClient {
    client: PtvClient,
    query: StopQuery,
    cache: MokaCache<(), Arc<CachedDepartures>>,
}

impl CachedPtvClient {
    /// Create a new cached client for a fixed stop query.
    pub fn new(client: PtvClient, query: StopQuery, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self {
            client,
            query,
            cache,
        }
    }

    /// Get the departures payload, hitting the network only when the
    /// cached entry is stale or absent.
    ///
    /// Concurrent misses share one in-flight fetch, so every waiter
    /// receives the same entry (or the same error, hence the `Arc`).
    /// Failed fetches are not cached; the next caller retries.
    pub async fn departures(&self) -> Result<Arc<CachedDepartures>, Arc<PtvError>> {
        self.cache
            .try_get_with((), async {
                let payload = self.client.departures(&self.query).await?;
                tracing::debug!(stop_id = %self.query.stop_id, "refreshed departures cache");
                Ok(Arc::new(CachedDepartures {
                    payload,
                    fetched_at: Utc::now(),
                }))
            })
            .await
    }
}
