use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::images::open_library_cover_url;
use super::{get_json, SourceAdapter};
use crate::config::BooksConfig;
use crate::translate::translate;
use crate::types::{join_creators, truncate_synopsis, BookExtras, CatalogRecord, Domain, Extras, SourceKind};

pub const UNKNOWN_TITLE: &str = "Título Desconhecido";
pub const BOOK_CATEGORY: &str = "Horror";

/// One subject listing on the books catalog.
pub struct OpenLibrarySubjectSource {
    client: reqwest::Client,
    base_url: String,
    covers_url: String,
    user_agent: String,
    subject: String,
    limit: u32,
}

impl OpenLibrarySubjectSource {
    pub fn new(client: reqwest::Client, config: &BooksConfig, subject: impl Into<String>) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            covers_url: config.covers_url.clone(),
            user_agent: config.user_agent.clone(),
            subject: subject.into(),
            limit: config.limit,
        }
    }

    /// One adapter per configured subject, sharing `client`.
    pub fn for_subjects(client: &reqwest::Client, config: &BooksConfig) -> Vec<Self> {
        config
            .subjects
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| Self::new(client.clone(), config, s.trim()))
            .collect()
    }

    fn endpoint(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/subjects/{}.json", self.base_url.trim_end_matches('/'), self.subject))
            .with_context(|| format!("invalid books endpoint for subject {}", self.subject))?;
        url.query_pairs_mut().append_pair("limit", &self.limit.to_string());
        Ok(url)
    }
}

#[async_trait]
impl SourceAdapter for OpenLibrarySubjectSource {
    fn label(&self) -> String { format!("openlibrary:{}", self.subject) }

    fn domain(&self) -> Domain { Domain::Books }

    async fn try_fetch(&self) -> Result<Vec<CatalogRecord>> {
        let request = self
            .client
            .get(self.endpoint()?)
            .header(reqwest::header::USER_AGENT, &self.user_agent);
        let body: SubjectResponse = get_json(request).await?;
        Ok(body.works.into_iter().filter_map(|w| map_work(w, &self.covers_url)).collect())
    }
}

#[derive(Debug, Deserialize)]
struct SubjectResponse {
    #[serde(default)]
    works: Vec<Work>,
}

#[derive(Debug, Deserialize)]
struct Work {
    key: Option<String>,
    title: Option<String>,
    #[serde(default)]
    authors: Vec<WorkAuthor>,
    first_publish_year: Option<i32>,
    cover_id: Option<i64>,
    cover_edition_key: Option<String>,
    edition_count: Option<u32>,
    description: Option<TextField>,
    first_sentence: Option<TextField>,
}

#[derive(Debug, Deserialize)]
struct WorkAuthor {
    name: Option<String>,
}

/// Text that arrives as a string, a list of strings, or `{ "value": .. }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextField {
    Plain(String),
    Lines(Vec<String>),
    Typed { value: String },
}

impl TextField {
    fn into_text(self) -> String {
        match self {
            TextField::Plain(s) | TextField::Typed { value: s } => s,
            TextField::Lines(lines) => lines.join(" "),
        }
    }
}

/// Works without a key have no stable id and are skipped.
fn map_work(work: Work, covers_url: &str) -> Option<CatalogRecord> {
    let key = work.key.filter(|k| !k.trim().is_empty())?;
    let original = work.title.filter(|t| !t.trim().is_empty()).unwrap_or_else(|| UNKNOWN_TITLE.to_string());
    let translated = translate(&original);
    let title = if translated.trim().is_empty() { original.clone() } else { translated };

    let author_names: Vec<String> = work.authors.into_iter().filter_map(|a| a.name).collect();
    let provided = work
        .description
        .map(TextField::into_text)
        .filter(|s| !s.trim().is_empty())
        .or_else(|| work.first_sentence.map(TextField::into_text).filter(|s| !s.trim().is_empty()));
    let synopsis = provided.unwrap_or_else(|| generated_synopsis(work.first_publish_year, author_names.first().map(String::as_str)));

    Some(CatalogRecord {
        id: key.trim_start_matches("/works/").to_string(),
        title,
        original_title: Some(original),
        creators: join_creators(&author_names),
        year: work.first_publish_year,
        synopsis: truncate_synopsis(&synopsis),
        cover_image: open_library_cover_url(covers_url, work.cover_id, work.cover_edition_key.as_deref()),
        category: BOOK_CATEGORY.to_string(),
        source_kind: SourceKind::Api,
        rating: None,
        extras: Extras::Book(BookExtras {
            edition_count: work.edition_count.unwrap_or(0),
            preview_link: Some(format!("https://openlibrary.org{key}")),
            publisher: None,
        }),
    })
}

fn generated_synopsis(year: Option<i32>, author: Option<&str>) -> String {
    let when = match year {
        Some(y) => format!("publicada em {y}"),
        None => "clássica".to_string(),
    };
    let by = match author.filter(|a| !a.trim().is_empty()) {
        Some(a) => format!("Escrita por {a}, "),
        None => String::new(),
    };
    format!(
        "Uma obra de horror {when} que explora temas sombrios e atmosferas perturbadoras. {by}esta história cativa leitores com sua narrativa envolvente e elementos assustadores."
    )
}
