//! Persistent favorites over four fixed categories.
//!
//! The whole document is one JSON blob under [`STORAGE_KEY`]. Every mutation is
//! a read-modify-write of that blob under a store-wide lock, so two concurrent
//! callers never interleave halfway through an update.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::warn;

use crate::storage::Storage;
use crate::telemetry::{EventKind, EventSink, FavoriteEvent, NoopSink};

pub const STORAGE_KEY: &str = "hallowtales_favorites";
pub const EXPORT_FILE_NAME: &str = "hallowtales_favoritos.json";
const UNKNOWN_ITEM_TITLE: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "filmes")]
    Films,
    #[serde(rename = "series")]
    Series,
    #[serde(rename = "livros")]
    Books,
    #[serde(rename = "jogos")]
    Games,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Films, Category::Series, Category::Books, Category::Games];

    /// Name used in the persisted document.
    pub fn key(self) -> &'static str {
        match self {
            Category::Films => "filmes",
            Category::Series => "series",
            Category::Books => "livros",
            Category::Games => "jogos",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filmes" | "films" | "movies" => Ok(Category::Films),
            "series" => Ok(Category::Series),
            "livros" | "books" => Ok(Category::Books),
            "jogos" | "games" => Ok(Category::Games),
            other => Err(anyhow!("unknown favorites category: {other}")),
        }
    }
}

/// One favorited item: its id, whatever the caller attached, and when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: String,
    #[serde(flatten)]
    pub data: Map<String, Value>,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

impl FavoriteEntry {
    /// `titulo`, then `title`, then a fixed placeholder.
    pub fn title(&self) -> String {
        ["titulo", "title"]
            .iter()
            .find_map(|k| self.data.get(*k).and_then(Value::as_str))
            .unwrap_or(UNKNOWN_ITEM_TITLE)
            .to_string()
    }
}

/// The persisted document. Missing categories read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesDocument {
    pub filmes: Vec<FavoriteEntry>,
    pub series: Vec<FavoriteEntry>,
    pub livros: Vec<FavoriteEntry>,
    pub jogos: Vec<FavoriteEntry>,
}

impl FavoritesDocument {
    pub fn entries(&self, category: Category) -> &Vec<FavoriteEntry> {
        match category {
            Category::Films => &self.filmes,
            Category::Series => &self.series,
            Category::Books => &self.livros,
            Category::Games => &self.jogos,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<FavoriteEntry> {
        match category {
            Category::Films => &mut self.filmes,
            Category::Series => &mut self.series,
            Category::Books => &mut self.livros,
            Category::Games => &mut self.jogos,
        }
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.entries(category).iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.entries(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

pub struct FavoritesStore {
    storage: Arc<dyn Storage>,
    sink: Arc<dyn EventSink>,
    lock: Mutex<()>,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage, sink: Arc::new(NoopSink), lock: Mutex::new(()) }
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Write the empty document if nothing is stored yet. Safe to call repeatedly.
    pub async fn initialize(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        match self.storage.get(STORAGE_KEY).await? {
            None => self.save(&FavoritesDocument::default()).await,
            Some(_) => self.load().await.map(|_| ()),
        }
    }

    pub async fn document(&self) -> Result<FavoritesDocument> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    pub async fn list(&self, category: Category) -> Result<Vec<FavoriteEntry>> {
        Ok(self.document().await?.entries(category).clone())
    }

    /// Like [`list`](Self::list), but an unknown category name is simply empty.
    pub async fn list_named(&self, category: &str) -> Result<Vec<FavoriteEntry>> {
        match category.parse::<Category>() {
            Ok(c) => self.list(c).await,
            Err(_) => Ok(Vec::new()),
        }
    }

    /// `false`, with nothing written, when `id` is already in the category.
    pub async fn add(&self, category: Category, id: &str, data: Map<String, Value>) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        if doc.contains(category, id) {
            return Ok(false);
        }
        let entry = insert(&mut doc, category, id, data);
        self.save(&doc).await?;
        self.emit(EventKind::FavoriteAdded, category, &entry);
        Ok(true)
    }

    /// Always `true`; removing an absent id is a no-op.
    pub async fn remove(&self, category: Category, id: &str) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        let removed = take(&mut doc, category, id);
        self.save(&doc).await?;
        if let Some(entry) = removed {
            self.emit(EventKind::FavoriteRemoved, category, &entry);
        }
        Ok(true)
    }

    /// Flip membership and report the new state.
    pub async fn toggle(&self, category: Category, id: &str, data: Map<String, Value>) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        if let Some(entry) = take(&mut doc, category, id) {
            self.save(&doc).await?;
            self.emit(EventKind::FavoriteRemoved, category, &entry);
            Ok(false)
        } else {
            let entry = insert(&mut doc, category, id, data);
            self.save(&doc).await?;
            self.emit(EventKind::FavoriteAdded, category, &entry);
            Ok(true)
        }
    }

    pub async fn is_favorite(&self, category: Category, id: &str) -> Result<bool> {
        Ok(self.document().await?.contains(category, id))
    }

    pub async fn count(&self) -> Result<usize> {
        Ok(self.document().await?.len())
    }

    /// Whole document as 2-space indented JSON.
    pub async fn export_all(&self) -> Result<String> {
        let doc = self.document().await?;
        serde_json::to_string_pretty(&doc).context("serializing favorites export")
    }

    /// Write the export to `dir/hallowtales_favoritos.json`.
    pub async fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let body = self.export_all().await?;
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating export dir: {}", dir.display()))?;
        let path = dir.join(EXPORT_FILE_NAME);
        tokio::fs::write(&path, body)
            .await
            .with_context(|| format!("writing export: {}", path.display()))?;
        Ok(path)
    }

    // Caller holds `lock`.
    async fn load(&self) -> Result<FavoritesDocument> {
        let Some(blob) = self.storage.get(STORAGE_KEY).await? else {
            return Ok(FavoritesDocument::default());
        };
        match serde_json::from_str::<Value>(&blob) {
            Ok(Value::Object(root)) => Ok(decode_document(root)),
            Ok(_) => {
                warn!("stored favorites is not a JSON object, resetting to empty");
                self.reset().await
            }
            Err(e) => {
                warn!(error = %e, "stored favorites unreadable, resetting to empty");
                self.reset().await
            }
        }
    }

    async fn reset(&self) -> Result<FavoritesDocument> {
        let doc = FavoritesDocument::default();
        self.save(&doc).await?;
        Ok(doc)
    }

    async fn save(&self, doc: &FavoritesDocument) -> Result<()> {
        let blob = serde_json::to_string(doc).context("serializing favorites")?;
        self.storage.set(STORAGE_KEY, &blob).await.context("persisting favorites")
    }

    fn emit(&self, kind: EventKind, category: Category, entry: &FavoriteEntry) {
        let event = FavoriteEvent { category, item_id: entry.id.clone(), item_title: entry.title() };
        self.sink.record(kind, &event);
    }
}

/// Decode category by category, dropping only the entries that do not parse.
fn decode_document(mut root: Map<String, Value>) -> FavoritesDocument {
    let mut doc = FavoritesDocument::default();
    for category in Category::ALL {
        let items = match root.remove(category.key()) {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => continue,
            Some(other) => {
                warn!(category = category.key(), found = %other, "favorites category is not a list, reading as empty");
                continue;
            }
        };
        let entries = doc.entries_mut(category);
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<FavoriteEntry>(item) {
                Ok(entry) if !entries.iter().any(|e| e.id == entry.id) => entries.push(entry),
                Ok(entry) => warn!(category = category.key(), id = %entry.id, "duplicate favorite skipped"),
                Err(e) => warn!(category = category.key(), index, error = %e, "malformed favorite skipped"),
            }
        }
    }
    doc
}

fn insert(doc: &mut FavoritesDocument, category: Category, id: &str, mut data: Map<String, Value>) -> FavoriteEntry {
    data.remove("id");
    data.remove("addedAt");
    let entry = FavoriteEntry { id: id.to_string(), data, added_at: Utc::now() };
    doc.entries_mut(category).push(entry.clone());
    entry
}

fn take(doc: &mut FavoritesDocument, category: Category, id: &str) -> Option<FavoriteEntry> {
    let list = doc.entries_mut(category);
    let pos = list.iter().position(|e| e.id == id)?;
    Some(list.remove(pos))
}
