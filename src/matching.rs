//! Heuristic reconciliation between curated records and live records.
//!
//! One rule serves both the "recommended" badge and cover backfill so the two
//! never disagree about which records coincide.

use crate::normalize::{normalize, words};
use crate::sources::images::is_placeholder;
use crate::types::CatalogRecord;

/// Titles with this many words or fewer also need agreeing creators.
const SHORT_TITLE_WORDS: usize = 2;

struct Titles {
    title: String,
    original: String,
    creators: String,
}

impl Titles {
    fn of(record: &CatalogRecord) -> Self {
        Self {
            title: normalize(&record.title),
            original: record.original_title.as_deref().map(normalize).unwrap_or_default(),
            creators: normalize(&record.creators),
        }
    }
}

/// Does the live record `live` coincide with the curated record `curated`?
pub fn matches(curated: &CatalogRecord, live: &CatalogRecord) -> bool {
    matches_titles(&Titles::of(curated), &Titles::of(live))
}

fn matches_titles(curated: &Titles, live: &Titles) -> bool {
    let rec = curated.title.as_str();
    if rec.is_empty() {
        return false;
    }
    let exact = rec == live.title || (!live.original.is_empty() && rec == live.original);

    let short = words(rec).len() <= SHORT_TITLE_WORDS || words(&live.title).len() <= SHORT_TITLE_WORDS;
    if short {
        return exact && creators_overlap(&curated.creators, &live.creators);
    }

    exact
        || contains_either(&live.title, rec)
        || (!live.original.is_empty() && contains_either(&live.original, rec))
}

fn contains_either(a: &str, b: &str) -> bool {
    !a.is_empty() && (a.contains(b) || b.contains(a))
}

fn creators_overlap(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// First curated record (declaration order) that `live` coincides with.
pub fn find_recommended<'a>(curated: &'a [CatalogRecord], live: &CatalogRecord) -> Option<&'a CatalogRecord> {
    let live_titles = Titles::of(live);
    curated.iter().find(|c| matches_titles(&Titles::of(c), &live_titles))
}

/// Give curated records the cover of their first matching live record when
/// their own cover is missing, a placeholder, or listed in `prefer_live`.
pub fn backfill_covers(curated: &mut [CatalogRecord], live: &[CatalogRecord], prefer_live: &[&str]) {
    let live_titles: Vec<Titles> = live.iter().map(Titles::of).collect();
    for record in curated.iter_mut() {
        let wants_cover = record.cover_image.trim().is_empty()
            || is_placeholder(&record.cover_image)
            || prefer_live.iter().any(|id| id.eq_ignore_ascii_case(&record.id));
        if !wants_cover {
            continue;
        }
        let titles = Titles::of(record);
        let found = live
            .iter()
            .zip(&live_titles)
            .find(|(l, lt)| has_real_cover(l) && matches_titles(&titles, lt));
        if let Some((hit, _)) = found {
            record.cover_image = hit.cover_image.clone();
        }
    }
}

fn has_real_cover(record: &CatalogRecord) -> bool {
    !record.cover_image.trim().is_empty() && !is_placeholder(&record.cover_image)
}
