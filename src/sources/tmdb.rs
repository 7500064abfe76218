use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::images::{tmdb_image_url, ImageKind};
use super::{get_json, SourceAdapter};
use crate::config::{ProviderConfig, SeriesConfig};
use crate::types::{truncate_synopsis, CatalogRecord, Domain, Extras, SeriesExtras, SourceKind};

pub const SERIES_CREATORS: &str = "Various";
pub const SERIES_GENRE: &str = "Horror/Mystery";
pub const NO_OVERVIEW: &str = "Sem sinopse disponível.";
pub const DEFAULT_RATING: f64 = 7.0;

/// Discovery query for one streaming provider.
pub struct TmdbProviderSource {
    client: reqwest::Client,
    config: SeriesConfig,
    provider: ProviderConfig,
}

impl TmdbProviderSource {
    pub fn new(client: reqwest::Client, config: &SeriesConfig, provider: ProviderConfig) -> Self {
        Self { client, config: config.clone(), provider }
    }

    /// Adapters in provider declaration order, which is also dedup priority.
    pub fn for_providers(client: &reqwest::Client, config: &SeriesConfig) -> Vec<Self> {
        config.providers.iter().cloned().map(|p| Self::new(client.clone(), config, p)).collect()
    }

    fn endpoint(&self) -> Result<Url> {
        let c = &self.config;
        let mut url = Url::parse(&format!("{}/discover/tv", c.base_url.trim_end_matches('/')))
            .context("invalid series discovery endpoint")?;
        url.query_pairs_mut()
            .append_pair("api_key", &c.api_key)
            .append_pair("with_genres", &c.genres)
            .append_pair("with_keywords", &c.keywords)
            .append_pair("with_watch_providers", &self.provider.id.to_string())
            .append_pair("watch_region", &c.region)
            .append_pair("sort_by", &c.sort_by)
            .append_pair("vote_count.gte", &c.min_vote_count.to_string())
            .append_pair("page", &c.page.to_string())
            .append_pair("language", &c.language);
        Ok(url)
    }
}

#[async_trait]
impl SourceAdapter for TmdbProviderSource {
    fn label(&self) -> String { format!("tmdb:{}", self.provider.name) }

    fn domain(&self) -> Domain { Domain::Series }

    async fn try_fetch(&self) -> Result<Vec<CatalogRecord>> {
        if !self.config.has_api_key() {
            debug!(provider = %self.provider.name, "no api key configured, skipping");
            return Ok(Vec::new());
        }
        let body: DiscoverResponse = get_json(self.client.get(self.endpoint()?)).await?;
        Ok(body
            .results
            .into_iter()
            .take(self.provider.max_results)
            .map(|show| map_show(show, &self.config.image_base_url, &self.provider.name))
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct DiscoverResponse {
    #[serde(default)]
    results: Vec<Show>,
}

#[derive(Debug, Deserialize)]
struct Show {
    id: u64,
    name: Option<String>,
    original_name: Option<String>,
    overview: Option<String>,
    first_air_date: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    number_of_seasons: Option<u32>,
    vote_average: Option<f64>,
    vote_count: Option<u32>,
    popularity: Option<f64>,
}

fn map_show(show: Show, image_base: &str, provider: &str) -> CatalogRecord {
    let title = show
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .or_else(|| show.original_name.clone().filter(|n| !n.trim().is_empty()))
        .unwrap_or_else(|| format!("#{}", show.id));
    let original_title = show.original_name.filter(|o| *o != title);
    let synopsis = show.overview.filter(|o| !o.trim().is_empty()).unwrap_or_else(|| NO_OVERVIEW.to_string());

    CatalogRecord {
        id: format!("serie-{}", show.id),
        title,
        original_title,
        creators: SERIES_CREATORS.to_string(),
        year: show.first_air_date.as_deref().and_then(air_year),
        synopsis: truncate_synopsis(&synopsis),
        cover_image: tmdb_image_url(image_base, ImageKind::Poster, show.poster_path.as_deref()),
        category: SERIES_GENRE.to_string(),
        source_kind: SourceKind::Api,
        rating: Some(rating(show.vote_average)),
        extras: Extras::Series(SeriesExtras {
            seasons: show.number_of_seasons,
            streaming_provider: provider.to_string(),
            popularity: show.popularity,
            votes: show.vote_count,
            backdrop: Some(tmdb_image_url(image_base, ImageKind::Backdrop, show.backdrop_path.as_deref())),
        }),
    }
}

fn air_year(date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok().map(|d| d.year())
}

/// One decimal place; a missing or zero average gets the default.
fn rating(vote_average: Option<f64>) -> f64 {
    match vote_average {
        Some(v) if v > 0.0 => (v * 10.0).round() / 10.0,
        _ => DEFAULT_RATING,
    }
}
