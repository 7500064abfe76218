use anyhow::{Context, Result};
use directories::ProjectDirs;
use sqlx::any::AnyPoolOptions;
use sqlx::{any::AnyConnectOptions, migrate::Migrator, AnyPool, ConnectOptions};
use std::path::Path;
use std::str::FromStr;
use std::sync::Once;

use crate::storage::Storage;

// sqlx::any needs its drivers registered once per process
static INSTALL_DRIVERS: Once = Once::new();

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// SQL-backed blob storage.
#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
}

impl Database {
    /// `None` or a blank URL means a SQLite file in the user's data directory.
    pub async fn connect(database_url: Option<&str>) -> Result<Self> {
        INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);

        let url = match database_url {
            Some(u) if !u.trim().is_empty() => u.to_string(),
            _ => default_sqlite_url()?,
        };

        let opts = AnyConnectOptions::from_str(&url)
            .with_context(|| format!("invalid database URL: {url}"))?
            .disable_statement_logging();

        let pool = AnyPoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .with_context(|| format!("failed to connect to database: {url}"))?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await.context("running migrations")
    }

    pub fn pool(&self) -> &AnyPool { &self.pool }

    pub async fn close(&self) { self.pool.close().await }
}

#[async_trait::async_trait]
impl Storage for Database {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("reading blob {key}"))?;
        Ok(row)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO kv_store(key, value, updated_at) VALUES (?, ?, ?)\n             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .with_context(|| format!("writing blob {key}"))?;
        Ok(())
    }
}

/// `sqlite://` URL for a file path, creating the file on first open.
pub fn sqlite_url(path: &Path) -> String {
    let path_str = path.to_string_lossy().replace(' ', "%20");
    format!("sqlite://{path_str}?mode=rwc")
}

fn default_sqlite_url() -> Result<String> {
    let proj = ProjectDirs::from("dev", "hallowtales", "hallowtales")
        .context("unable to determine data directory for default sqlite path")?;
    let dir = proj.data_dir();
    std::fs::create_dir_all(dir).with_context(|| format!("creating data dir: {}", dir.display()))?;
    Ok(sqlite_url(&dir.join("hallowtales.db")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blobs_survive_reconnect() {
        let dir = tempfile::tempdir().unwrap();
        let url = sqlite_url(&dir.path().join("fav.db"));

        let db = Database::connect(Some(&url)).await.unwrap();
        db.run_migrations().await.unwrap();
        assert_eq!(db.get("k").await.unwrap(), None);
        db.set("k", "{\"a\":1}").await.unwrap();
        db.set("k", "{\"a\":2}").await.unwrap();
        db.close().await;

        let db = Database::connect(Some(&url)).await.unwrap();
        db.run_migrations().await.unwrap();
        assert_eq!(db.get("k").await.unwrap().as_deref(), Some("{\"a\":2}"));
    }

    #[test]
    fn url_escapes_spaces() {
        assert_eq!(sqlite_url(Path::new("/tmp/my dir/x.db")), "sqlite:///tmp/my%20dir/x.db?mode=rwc");
    }
}
