use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration. Every section falls back to the reference defaults,
/// so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub books: BooksConfig,
    pub series: SeriesConfig,
    pub http: HttpConfig,
    pub favorites: FavoritesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BooksConfig {
    pub base_url: String,
    pub covers_url: String,
    pub subjects: Vec<String>,
    pub limit: u32,
    pub user_agent: String,
    pub ttl_secs: u64,
    pub max_records: Option<usize>,
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openlibrary.org".to_string(),
            covers_url: "https://covers.openlibrary.org/b".to_string(),
            subjects: ["horror", "horror_tales", "gothic_horror", "supernatural"].map(String::from).to_vec(),
            limit: 50,
            user_agent: "HallowTales/1.0 (hallowtales@example.com)".to_string(),
            ttl_secs: 10 * 60,
            max_records: Some(100),
        }
    }
}

impl BooksConfig {
    pub fn ttl(&self) -> Duration { Duration::from_secs(self.ttl_secs) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub id: u32,
    pub name: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize { 5 }

impl ProviderConfig {
    fn new(id: u32, name: &str, max_results: usize) -> Self {
        Self { id, name: name.to_string(), max_results }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    pub base_url: String,
    pub image_base_url: String,
    pub api_key: String,
    pub genres: String,
    pub keywords: String,
    pub region: String,
    pub language: String,
    pub sort_by: String,
    pub min_vote_count: u32,
    pub page: u32,
    pub ttl_secs: u64,
    pub max_records: Option<usize>,
    pub providers: Vec<ProviderConfig>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
            api_key: String::new(),
            genres: "10765,9648".to_string(),
            keywords: "9663|4458|9951|180547".to_string(),
            region: "US".to_string(),
            language: "pt-BR".to_string(),
            sort_by: "popularity.desc".to_string(),
            min_vote_count: 50,
            page: 1,
            ttl_secs: 5 * 60,
            max_records: None,
            providers: vec![
                ProviderConfig::new(8, "Netflix", 8),
                ProviderConfig::new(337, "Disney+", 5),
                ProviderConfig::new(531, "Paramount+", 5),
                ProviderConfig::new(350, "Apple TV+", 5),
                ProviderConfig::new(119, "Prime Video", 5),
                ProviderConfig::new(384, "HBO Max", 5),
            ],
        }
    }
}

impl SeriesConfig {
    pub fn ttl(&self) -> Duration { Duration::from_secs(self.ttl_secs) }
    pub fn has_api_key(&self) -> bool { !self.api_key.trim().is_empty() }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request transport timeout.
    pub timeout_ms: u64,
    /// Deadline for a whole aggregation cycle; unset means none.
    pub aggregate_timeout_ms: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_ms: 15_000, aggregate_timeout_ms: None }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration { Duration::from_millis(self.timeout_ms) }
    pub fn aggregate_timeout(&self) -> Option<Duration> { self.aggregate_timeout_ms.map(Duration::from_millis) }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    /// Database URL for the favorites document. `None` uses a SQLite file in the user's data dir.
    pub database_url: Option<String>,
}

impl AppConfig {
    /// Load from an explicit TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        let mut cfg: AppConfig = toml::from_str(&text)
            .with_context(|| format!("parsing config file: {}", path.display()))?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    /// Load `config.toml` from the platform config dir when present, defaults otherwise.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                Ok(cfg)
            }
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub(crate) fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("HALLOWTALES_TMDB_API_KEY") {
            self.series.api_key = key;
        }
        if let Some(ttl) = lookup("HALLOWTALES_BOOKS_TTL_SECS").and_then(|s| s.parse().ok()) {
            self.books.ttl_secs = ttl;
        }
        if let Some(ttl) = lookup("HALLOWTALES_SERIES_TTL_SECS").and_then(|s| s.parse().ok()) {
            self.series.ttl_secs = ttl;
        }
        if let Some(url) = lookup("HALLOWTALES_DATABASE_URL").filter(|s| !s.trim().is_empty()) {
            self.favorites.database_url = Some(url);
        }
    }

    /// Collect every problem instead of stopping at the first.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.books.ttl_secs == 0 {
            errors.push("books.ttl_secs must be greater than zero".to_string());
        }
        if self.series.ttl_secs == 0 {
            errors.push("series.ttl_secs must be greater than zero".to_string());
        }
        if self.books.limit == 0 {
            errors.push("books.limit must be greater than zero".to_string());
        }
        if self.books.subjects.iter().all(|s| s.trim().is_empty()) {
            errors.push("books.subjects must name at least one subject".to_string());
        }
        if self.http.timeout_ms == 0 {
            errors.push("http.timeout_ms must be greater than zero".to_string());
        }
        for (i, p) in self.series.providers.iter().enumerate() {
            if p.name.trim().is_empty() {
                errors.push(format!("series.providers[{i}].name is empty"));
            }
            if p.max_results == 0 {
                errors.push(format!("series.providers[{i}].max_results must be greater than zero"));
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "hallowtales", "hallowtales").map(|p| p.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_yields_reference_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.books.ttl(), Duration::from_secs(600));
        assert_eq!(cfg.series.ttl(), Duration::from_secs(300));
        assert_eq!(cfg.books.max_records, Some(100));
        assert_eq!(cfg.series.max_records, None);
        assert_eq!(cfg.series.providers.len(), 6);
        assert_eq!(cfg.series.providers[0], ProviderConfig::new(8, "Netflix", 8));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let text = r#"
            [series]
            api_key = "abc"
            region = "BR"

            [[series.providers]]
            id = 1899
            name = "Shudder"
        "#;
        let cfg: AppConfig = toml::from_str(text).unwrap();
        assert_eq!(cfg.series.api_key, "abc");
        assert_eq!(cfg.series.region, "BR");
        assert_eq!(cfg.series.language, "pt-BR");
        assert_eq!(cfg.series.providers, vec![ProviderConfig::new(1899, "Shudder", 5)]);
        assert_eq!(cfg.books, BooksConfig::default());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[books]\nlimit = 20\n").unwrap();
        let cfg = AppConfig::load(&path).unwrap();
        assert_eq!(cfg.books.limit, 20);
    }

    #[test]
    fn load_reports_bad_toml_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[books\n").unwrap();
        let err = AppConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config file"));
    }

    #[test]
    fn overrides_apply_and_ignore_garbage() {
        let env: HashMap<&str, &str> = [
            ("HALLOWTALES_TMDB_API_KEY", "k"),
            ("HALLOWTALES_BOOKS_TTL_SECS", "42"),
            ("HALLOWTALES_SERIES_TTL_SECS", "soon"),
            ("HALLOWTALES_DATABASE_URL", "sqlite:///tmp/x.db"),
        ]
        .into_iter()
        .collect();
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert!(cfg.series.has_api_key());
        assert_eq!(cfg.books.ttl_secs, 42);
        assert_eq!(cfg.series.ttl_secs, 300);
        assert_eq!(cfg.favorites.database_url.as_deref(), Some("sqlite:///tmp/x.db"));
    }

    #[test]
    fn validate_collects_all_problems() {
        let mut cfg = AppConfig::default();
        cfg.books.ttl_secs = 0;
        cfg.books.subjects.clear();
        cfg.series.providers[1].max_results = 0;
        let errors = cfg.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
