use std::sync::Arc;

use anyhow::Result;

use crate::aggregator::{Aggregator, FallbackPolicy};
use crate::cache::CatalogCache;
use crate::config::AppConfig;
use crate::fallback::{fallback_series, recommended_books, PREFER_LIVE_COVER};
use crate::matching::{backfill_covers, find_recommended};
use crate::sources::{build_client, OpenLibrarySubjectSource, SourceAdapter, TmdbProviderSource};
use crate::types::{CatalogRecord, Domain};

/// Result of a filtered listing. An empty match is an expected outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<CatalogRecord>),
    NoResults { term: String },
}

impl SearchOutcome {
    pub fn records(&self) -> &[CatalogRecord] {
        match self {
            SearchOutcome::Found(r) => r,
            SearchOutcome::NoResults { .. } => &[],
        }
    }

    pub fn into_records(self) -> Vec<CatalogRecord> {
        match self {
            SearchOutcome::Found(r) => r,
            SearchOutcome::NoResults { .. } => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool { matches!(self, SearchOutcome::NoResults { .. }) }
}

/// A live book with the curated record it coincides with, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgedRecord {
    pub record: CatalogRecord,
    pub recommended: Option<CatalogRecord>,
}

/// Read-only view over both catalogs plus the curated books shortlist.
pub struct CatalogStore {
    books: CatalogCache,
    series: CatalogCache,
    recommended: Vec<CatalogRecord>,
}

impl CatalogStore {
    pub fn new(books: CatalogCache, series: CatalogCache, recommended: Vec<CatalogRecord>) -> Self {
        Self { books, series, recommended }
    }

    /// Wire the live adapters described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let books_client = build_client(&config.http, Some(&config.books.user_agent))?;
        let book_adapters: Vec<Arc<dyn SourceAdapter>> = OpenLibrarySubjectSource::for_subjects(&books_client, &config.books)
            .into_iter()
            .map(|a| Arc::new(a) as Arc<dyn SourceAdapter>)
            .collect();
        let recommended = recommended_books();
        let books = Aggregator::new(Domain::Books, book_adapters, recommended.clone(), FallbackPolicy::Separate)
            .with_max_records(config.books.max_records)
            .with_deadline(config.http.aggregate_timeout());

        let series_client = build_client(&config.http, None)?;
        let series_adapters: Vec<Arc<dyn SourceAdapter>> = TmdbProviderSource::for_providers(&series_client, &config.series)
            .into_iter()
            .map(|a| Arc::new(a) as Arc<dyn SourceAdapter>)
            .collect();
        let series = Aggregator::new(Domain::Series, series_adapters, fallback_series(), FallbackPolicy::MergeByTitle)
            .with_max_records(config.series.max_records)
            .with_deadline(config.http.aggregate_timeout());

        Ok(Self::new(
            CatalogCache::new(books, config.books.ttl()),
            CatalogCache::new(series, config.series.ttl()),
            recommended,
        ))
    }

    pub async fn books(&self) -> Vec<CatalogRecord> { self.books.get_or_refresh().await }

    pub async fn series(&self) -> Vec<CatalogRecord> { self.series.get_or_refresh().await }

    pub async fn catalog(&self, domain: Domain) -> Vec<CatalogRecord> {
        match domain {
            Domain::Books => self.books().await,
            Domain::Series => self.series().await,
        }
    }

    pub async fn search_books(&self, term: &str) -> SearchOutcome { search(self.books().await, term) }

    pub async fn search_series(&self, term: &str) -> SearchOutcome { search(self.series().await, term) }

    /// The curated shortlist, covers filled in from the current live catalog.
    pub async fn recommended_books(&self) -> Vec<CatalogRecord> {
        let live: Vec<CatalogRecord> = self.books().await.into_iter().filter(|r| !r.is_recommended()).collect();
        let mut curated = self.recommended.clone();
        backfill_covers(&mut curated, &live, PREFER_LIVE_COVER);
        curated
    }

    pub async fn books_with_badges(&self) -> Vec<BadgedRecord> {
        self.books()
            .await
            .into_iter()
            .filter(|r| !r.is_recommended())
            .map(|record| {
                let recommended = find_recommended(&self.recommended, &record).cloned();
                BadgedRecord { record, recommended }
            })
            .collect()
    }

    pub async fn invalidate(&self) {
        self.books.invalidate().await;
        self.series.invalidate().await;
    }
}

/// Case-insensitive substring over title, original title, creators, synopsis.
/// A blank term keeps everything.
pub fn search(records: Vec<CatalogRecord>, term: &str) -> SearchOutcome {
    let needle = term.trim().to_lowercase();
    let hits: Vec<CatalogRecord> = if needle.is_empty() {
        records
    } else {
        records.into_iter().filter(|r| record_matches(r, &needle)).collect()
    };
    if hits.is_empty() {
        SearchOutcome::NoResults { term: term.trim().to_string() }
    } else {
        SearchOutcome::Found(hits)
    }
}

fn record_matches(r: &CatalogRecord, needle: &str) -> bool {
    r.title.to_lowercase().contains(needle)
        || r.original_title.as_deref().is_some_and(|t| t.to_lowercase().contains(needle))
        || r.creators.to_lowercase().contains(needle)
        || r.synopsis.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::tests::{record, Canned};
    use crate::types::SourceKind;
    use std::time::Duration;

    fn book(id: &str, title: &str, original: Option<&str>, creators: &str, cover: &str) -> CatalogRecord {
        CatalogRecord {
            original_title: original.map(str::to_string),
            creators: creators.into(),
            cover_image: cover.into(),
            ..record(id, title, SourceKind::Api)
        }
    }

    fn store(live_books: Vec<CatalogRecord>) -> (CatalogStore, Arc<Canned>) {
        let adapter = Canned::new(live_books);
        let recommended = recommended_books();
        let books = Aggregator::new(Domain::Books, vec![adapter.clone() as Arc<dyn SourceAdapter>], recommended.clone(), FallbackPolicy::Separate);
        let series = Aggregator::new(Domain::Series, vec![], fallback_series(), FallbackPolicy::MergeByTitle);
        let store = CatalogStore::new(
            CatalogCache::new(books, Duration::from_secs(600)),
            CatalogCache::new(series, Duration::from_secs(300)),
            recommended,
        );
        (store, adapter)
    }

    #[tokio::test]
    async fn search_covers_original_title_and_creators() {
        let (s, _) = store(vec![
            book("OL1W", "O Iluminado", Some("The Shining"), "Stephen King", "c"),
            book("OL2W", "Drácula", Some("Dracula"), "Bram Stoker", "c"),
        ]);
        assert_eq!(s.search_books("shining").await.records()[0].id, "OL1W");
        assert_eq!(s.search_books("STOKER").await.records()[0].id, "OL2W");
        assert_eq!(s.search_books("  ").await.records().len(), 2);
        assert_eq!(s.search_books("zzz").await, SearchOutcome::NoResults { term: "zzz".into() });
    }

    #[tokio::test]
    async fn series_without_live_sources_is_the_fallback_set() {
        let (s, _) = store(vec![]);
        let series = s.series().await;
        assert_eq!(series.len(), 35);
        assert!(s.search_series("flanagan").await.records().len() >= 4);
    }

    #[tokio::test]
    async fn recommended_covers_come_from_live_matches() {
        let (s, _) = store(vec![
            book("OL3W", "Drácula", Some("Dracula"), "Bram Stoker", "https://covers.openlibrary.org/b/id/1-L.jpg"),
            book("OL4W", "O Iluminado", Some("The Shining"), "Stephen King", "https://covers.openlibrary.org/b/id/2-L.jpg"),
        ]);
        let rec = s.recommended_books().await;
        let dracula = rec.iter().find(|r| r.id == "dracula").unwrap();
        assert_eq!(dracula.cover_image, "https://covers.openlibrary.org/b/id/1-L.jpg");
        let shining = rec.iter().find(|r| r.id == "o-iluminado").unwrap();
        assert_eq!(shining.cover_image, "https://covers.openlibrary.org/b/isbn/0385121679-L.jpg");
    }

    #[tokio::test]
    async fn badges_mark_live_books_present_in_shortlist() {
        let (s, adapter) = store(vec![
            book("OL5W", "It: A Coisa", Some("It"), "Stephen King", "c"),
            book("OL6W", "Drácula", None, "Agatha Christie", "c"),
            book("OL7W", "Casa de Folhas", Some("House of Leaves"), "Mark Z. Danielewski", "c"),
        ]);
        let badged = s.books_with_badges().await;
        assert_eq!(badged[0].recommended.as_ref().map(|r| r.id.as_str()), Some("it-coisa"));
        assert!(badged[1].recommended.is_none());
        assert!(badged[2].recommended.is_none());
        assert_eq!(adapter.calls(), 1);
    }

    #[tokio::test]
    async fn dead_books_source_lists_shortlist_without_badges() {
        let (s, _) = store(vec![]);
        assert_eq!(s.books().await.len(), 10);
        assert!(s.books_with_badges().await.is_empty());
    }
}
