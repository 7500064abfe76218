use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest synopsis kept on a record, in characters.
pub const SYNOPSIS_MAX_CHARS: usize = 400;
pub const UNKNOWN_CREATOR: &str = "Unknown";
pub const YEAR_UNKNOWN: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Books,
    Series,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Books => f.write_str("books"),
            Domain::Series => f.write_str("series"),
        }
    }
}

/// Provenance of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Api,
    Recommended,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookExtras {
    pub edition_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesExtras {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasons: Option<u32>,
    pub streaming_provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "domain", rename_all = "lowercase")]
pub enum Extras {
    #[default]
    None,
    Book(BookExtras),
    Series(SeriesExtras),
}

/// Unified shape for books and series, immutable once built for a cache epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub id: String,
    pub title: String,
    /// Untranslated source title, kept for cross-record matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    pub creators: String,
    #[serde(with = "year_format")]
    pub year: Option<i32>,
    pub synopsis: String,
    pub cover_image: String,
    pub category: String,
    pub source_kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub extras: Extras,
}

impl CatalogRecord {
    pub fn is_recommended(&self) -> bool {
        self.source_kind == SourceKind::Recommended
    }

    pub fn year_label(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_else(|| YEAR_UNKNOWN.to_string())
    }

    pub fn streaming_provider(&self) -> Option<&str> {
        match &self.extras {
            Extras::Series(s) => Some(s.streaming_provider.as_str()),
            _ => None,
        }
    }
}

/// Cap a synopsis at [`SYNOPSIS_MAX_CHARS`], ending with `...` when cut.
pub fn truncate_synopsis(text: &str) -> String {
    if text.chars().count() <= SYNOPSIS_MAX_CHARS {
        return text.to_string();
    }
    let mut out: String = text.chars().take(SYNOPSIS_MAX_CHARS - 3).collect();
    out.push_str("...");
    out
}

/// Join creator names, or the unknown sentinel when there are none.
pub fn join_creators<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() { UNKNOWN_CREATOR.to_string() } else { joined }
}

/// `year` is a number, or the string `"N/A"` when unknown.
mod year_format {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::YEAR_UNKNOWN;

    pub fn serialize<S: Serializer>(year: &Option<i32>, s: S) -> Result<S::Ok, S::Error> {
        match year {
            Some(y) => s.serialize_i32(*y),
            None => s.serialize_str(YEAR_UNKNOWN),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i32),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
        Ok(match Option::<Raw>::deserialize(d)? {
            Some(Raw::Num(y)) => Some(y),
            Some(Raw::Text(t)) => t.trim().parse().ok(),
            None => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: Option<i32>) -> CatalogRecord {
        CatalogRecord {
            id: "x".into(),
            title: "X".into(),
            original_title: None,
            creators: UNKNOWN_CREATOR.into(),
            year,
            synopsis: "s".into(),
            cover_image: "c".into(),
            category: "Horror".into(),
            source_kind: SourceKind::Api,
            rating: None,
            extras: Extras::None,
        }
    }

    #[test]
    fn unknown_year_serializes_as_sentinel() {
        let json = serde_json::to_value(record(None)).unwrap();
        assert_eq!(json["year"], "N/A");
        assert_eq!(json["sourceKind"], "api");
        let back: CatalogRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back.year, None);
    }

    #[test]
    fn known_year_serializes_as_number() {
        let json = serde_json::to_value(record(Some(1977))).unwrap();
        assert_eq!(json["year"], 1977);
        assert_eq!(record(Some(1977)).year_label(), "1977");
        assert_eq!(record(None).year_label(), "N/A");
    }

    #[test]
    fn synopsis_truncation_counts_characters() {
        let short = "é".repeat(400);
        assert_eq!(truncate_synopsis(&short), short);

        let long = "é".repeat(401);
        let cut = truncate_synopsis(&long);
        assert_eq!(cut.chars().count(), 400);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn creators_join_or_fall_back() {
        assert_eq!(join_creators(["Stephen King", " Peter Straub "]), "Stephen King, Peter Straub");
        assert_eq!(join_creators(Vec::<String>::new()), UNKNOWN_CREATOR);
        assert_eq!(join_creators([" "]), UNKNOWN_CREATOR);
    }
}
