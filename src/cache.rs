use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::aggregator::Aggregator;
use crate::types::CatalogRecord;

/// Last successful aggregation, replaced wholesale on refresh.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: Vec<CatalogRecord>,
    pub fetched_at: Instant,
}

/// TTL memo in front of one domain's aggregator. The entry lock is held across
/// a refresh, so concurrent callers share a single aggregation.
pub struct CatalogCache {
    aggregator: Aggregator,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl CatalogCache {
    pub fn new(aggregator: Aggregator, ttl: Duration) -> Self {
        Self { aggregator, ttl, entry: Mutex::new(None) }
    }

    pub fn ttl(&self) -> Duration { self.ttl }

    pub fn aggregator(&self) -> &Aggregator { &self.aggregator }

    pub async fn get_or_refresh(&self) -> Vec<CatalogRecord> {
        let mut entry = self.entry.lock().await;
        if let Some(cached) = entry.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                debug!(domain = %self.aggregator.domain(), "serving cached catalog");
                return cached.data.clone();
            }
        }

        debug!(domain = %self.aggregator.domain(), "catalog stale or empty, refreshing");
        match self.aggregator.aggregate().await {
            Ok(data) => {
                *entry = Some(CacheEntry { data: data.clone(), fetched_at: Instant::now() });
                data
            }
            Err(e) => {
                // Leave the entry alone so the next call retries.
                warn!(domain = %self.aggregator.domain(), error = %format!("{e:#}"), "aggregation failed, serving fallback");
                self.aggregator.fallback().to_vec()
            }
        }
    }

    /// Drop the memo; the next read aggregates again.
    pub async fn invalidate(&self) {
        *self.entry.lock().await = None;
    }

    pub async fn fetched_at(&self) -> Option<Instant> {
        self.entry.lock().await.as_ref().map(|e| e.fetched_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::tests::{record, Canned};
    use crate::aggregator::FallbackPolicy;
    use crate::sources::SourceAdapter;
    use crate::types::{Domain, SourceKind};
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    fn cache_over(adapter: Arc<Canned>, ttl: Duration, deadline: Option<Duration>) -> CatalogCache {
        let agg = Aggregator::new(
            Domain::Series,
            vec![adapter as Arc<dyn SourceAdapter>],
            vec![record("serie1", "The Walking Dead", SourceKind::Recommended)],
            FallbackPolicy::MergeByTitle,
        )
        .with_deadline(deadline);
        CatalogCache::new(agg, ttl)
    }

    #[tokio::test(start_paused = true)]
    async fn fresh_entry_makes_no_adapter_calls() {
        let adapter = Canned::new(vec![record("serie-1", "From", SourceKind::Api)]);
        let cache = cache_over(adapter.clone(), Duration::from_secs(300), None);

        let first = cache.get_or_refresh().await;
        tokio::time::advance(Duration::from_secs(299)).await;
        let second = cache.get_or_refresh().await;

        assert_eq!(adapter.calls(), 1);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_entry_is_refreshed() {
        let adapter = Canned::new(vec![record("serie-1", "From", SourceKind::Api)]);
        let cache = cache_over(adapter.clone(), Duration::from_secs(300), None);

        cache.get_or_refresh().await;
        let stamped = cache.fetched_at().await.unwrap();
        tokio::time::advance(Duration::from_secs(300)).await;
        cache.get_or_refresh().await;

        assert_eq!(adapter.calls(), 2);
        assert!(cache.fetched_at().await.unwrap() > stamped);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_cycle_serves_fallback_without_caching() {
        let slow = Arc::new(Canned {
            records: vec![record("serie-1", "From", SourceKind::Api)],
            calls: AtomicUsize::new(0),
            stall: Some(Duration::from_secs(60)),
            fail: false,
        });
        let cache = cache_over(slow.clone(), Duration::from_secs(300), Some(Duration::from_secs(1)));

        let out = cache.get_or_refresh().await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "serie1");
        assert!(cache.fetched_at().await.is_none());

        cache.get_or_refresh().await;
        assert_eq!(slow.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_readers_share_one_refresh() {
        let adapter = Canned::new(vec![record("serie-1", "From", SourceKind::Api)]);
        let cache = cache_over(adapter.clone(), Duration::from_secs(300), None);
        let (a, b) = tokio::join!(cache.get_or_refresh(), cache.get_or_refresh());
        assert_eq!(a, b);
        assert_eq!(adapter.calls(), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_refresh() {
        let adapter = Canned::new(vec![record("serie-1", "From", SourceKind::Api)]);
        let cache = cache_over(adapter.clone(), Duration::from_secs(300), None);
        cache.get_or_refresh().await;
        cache.invalidate().await;
        cache.get_or_refresh().await;
        assert_eq!(adapter.calls(), 2);
    }
}
