use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use futures::future::join_all;
use tracing::{info, warn};

use crate::sources::SourceAdapter;
use crate::types::{CatalogRecord, Domain};

/// How the curated set joins the live set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Append curated records whose lowercase title no live record carries.
    MergeByTitle,
    /// Keep curated records apart; they stand in only when nothing live arrived.
    Separate,
}

/// Fans out to a domain's adapters and folds their output into one catalog.
pub struct Aggregator {
    domain: Domain,
    adapters: Vec<Arc<dyn SourceAdapter>>,
    fallback: Vec<CatalogRecord>,
    policy: FallbackPolicy,
    max_records: Option<usize>,
    deadline: Option<Duration>,
}

impl Aggregator {
    pub fn new(domain: Domain, adapters: Vec<Arc<dyn SourceAdapter>>, fallback: Vec<CatalogRecord>, policy: FallbackPolicy) -> Self {
        Self { domain, adapters, fallback, policy, max_records: None, deadline: None }
    }

    pub fn with_max_records(mut self, max: Option<usize>) -> Self {
        self.max_records = max;
        self
    }

    /// Whole-cycle deadline; elapsing it fails the cycle.
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn domain(&self) -> Domain { self.domain }
    pub fn fallback(&self) -> &[CatalogRecord] { &self.fallback }
    pub fn adapter_count(&self) -> usize { self.adapters.len() }

    pub async fn aggregate(&self) -> Result<Vec<CatalogRecord>> {
        let live = match self.deadline {
            Some(limit) => tokio::time::timeout(limit, self.collect_live())
                .await
                .map_err(|_| anyhow!("{} aggregation exceeded {:?}", self.domain, limit))?,
            None => self.collect_live().await,
        };
        let live_count = live.len();
        if live_count == 0 {
            warn!(domain = %self.domain, "no live records this cycle, serving curated set");
        }

        let mut out = self.merge_fallback(live);
        if let Some(max) = self.max_records {
            out.truncate(max);
        }
        info!(domain = %self.domain, live = live_count, total = out.len(), "aggregated catalog");
        Ok(out)
    }

    /// All adapters dispatched together; dedup keeps the first id in dispatch order.
    async fn collect_live(&self) -> Vec<CatalogRecord> {
        let batches = join_all(self.adapters.iter().map(|a| a.fetch())).await;
        let mut seen = HashSet::new();
        batches.into_iter().flatten().filter(|r| seen.insert(r.id.clone())).collect()
    }

    fn merge_fallback(&self, mut live: Vec<CatalogRecord>) -> Vec<CatalogRecord> {
        match self.policy {
            FallbackPolicy::Separate => {
                if live.is_empty() { self.fallback.clone() } else { live }
            }
            FallbackPolicy::MergeByTitle => {
                let mut titles: HashSet<String> = live.iter().map(|r| r.title.to_lowercase()).collect();
                let mut ids: HashSet<String> = live.iter().map(|r| r.id.clone()).collect();
                for record in &self.fallback {
                    if titles.insert(record.title.to_lowercase()) && ids.insert(record.id.clone()) {
                        live.push(record.clone());
                    }
                }
                live
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::{Extras, SourceKind};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) fn record(id: &str, title: &str, kind: SourceKind) -> CatalogRecord {
        CatalogRecord {
            id: id.into(),
            title: title.into(),
            original_title: None,
            creators: "Unknown".into(),
            year: None,
            synopsis: "s".into(),
            cover_image: "c".into(),
            category: "Horror".into(),
            source_kind: kind,
            rating: None,
            extras: Extras::None,
        }
    }

    /// Canned adapter that counts its fetches and can stall or fail.
    pub(crate) struct Canned {
        pub records: Vec<CatalogRecord>,
        pub calls: AtomicUsize,
        pub stall: Option<Duration>,
        pub fail: bool,
    }

    impl Canned {
        pub(crate) fn new(records: Vec<CatalogRecord>) -> Arc<Self> {
            Arc::new(Self { records, calls: AtomicUsize::new(0), stall: None, fail: false })
        }
        pub(crate) fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
    }

    #[async_trait]
    impl SourceAdapter for Canned {
        fn label(&self) -> String { "canned".into() }
        fn domain(&self) -> Domain { Domain::Series }
        async fn try_fetch(&self) -> Result<Vec<CatalogRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(d) = self.stall {
                tokio::time::sleep(d).await;
            }
            if self.fail {
                anyhow::bail!("forced failure");
            }
            Ok(self.records.clone())
        }
    }

    fn live(id: &str, title: &str) -> CatalogRecord { record(id, title, SourceKind::Api) }
    fn curated(id: &str, title: &str) -> CatalogRecord { record(id, title, SourceKind::Recommended) }

    fn adapters(list: &[Arc<Canned>]) -> Vec<Arc<dyn SourceAdapter>> {
        list.iter().map(|a| a.clone() as Arc<dyn SourceAdapter>).collect()
    }

    fn ids(records: &[CatalogRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn dedups_and_appends_fallback_in_dispatch_order() {
        let a = Canned::new(vec![live("1", "A")]);
        let b = Canned::new(vec![live("1", "A")]);
        let c = Canned::new(vec![live("2", "B")]);
        let agg = Aggregator::new(Domain::Series, adapters(&[a, b, c]), vec![curated("3", "C")], FallbackPolicy::MergeByTitle);
        let out = agg.aggregate().await.unwrap();
        assert_eq!(ids(&out), ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn fallback_with_live_title_is_skipped() {
        let a = Canned::new(vec![live("serie-66732", "Stranger Things")]);
        let fallback = vec![curated("serie2", "stranger things"), curated("serie9", "Marianne")];
        let agg = Aggregator::new(Domain::Series, adapters(&[a]), fallback, FallbackPolicy::MergeByTitle);
        assert_eq!(ids(&agg.aggregate().await.unwrap()), ["serie-66732", "serie9"]);
    }

    #[tokio::test]
    async fn every_adapter_failing_still_yields_fallback() {
        let failing = Arc::new(Canned { records: vec![], calls: AtomicUsize::new(0), stall: None, fail: true });
        for policy in [FallbackPolicy::MergeByTitle, FallbackPolicy::Separate] {
            let agg = Aggregator::new(Domain::Books, adapters(&[failing.clone(), failing.clone()]), vec![curated("dracula", "Drácula")], policy);
            assert_eq!(ids(&agg.aggregate().await.unwrap()), ["dracula"]);
        }
    }

    #[tokio::test]
    async fn separate_policy_keeps_curated_out_of_live_catalog() {
        let a = Canned::new(vec![live("OL1W", "Drácula")]);
        let agg = Aggregator::new(Domain::Books, adapters(&[a]), vec![curated("dracula", "Drácula")], FallbackPolicy::Separate);
        assert_eq!(ids(&agg.aggregate().await.unwrap()), ["OL1W"]);
    }

    #[tokio::test]
    async fn cap_truncates_tail() {
        let a = Canned::new((0..5).map(|i| live(&i.to_string(), &format!("T{i}"))).collect());
        let agg = Aggregator::new(Domain::Books, adapters(&[a]), vec![], FallbackPolicy::Separate).with_max_records(Some(3));
        assert_eq!(ids(&agg.aggregate().await.unwrap()), ["0", "1", "2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_cycle_fails_past_deadline() {
        let slow = Arc::new(Canned { records: vec![live("1", "A")], calls: AtomicUsize::new(0), stall: Some(Duration::from_secs(60)), fail: false });
        let agg = Aggregator::new(Domain::Series, adapters(&[slow]), vec![], FallbackPolicy::MergeByTitle)
            .with_deadline(Some(Duration::from_secs(5)));
        let err = agg.aggregate().await.unwrap_err();
        assert!(err.to_string().contains("exceeded"));
    }
}
