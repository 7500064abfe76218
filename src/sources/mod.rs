//! Live catalog adapters. Each adapter fetches and maps one upstream query;
//! failures are contained at this boundary so one bad source never sinks a cycle.

pub mod images;
pub mod open_library;
pub mod tmdb;

use std::time::Instant;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::types::{CatalogRecord, Domain};

pub use open_library::OpenLibrarySubjectSource;
pub use tmdb::TmdbProviderSource;

#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Short label used in logs.
    fn label(&self) -> String;

    fn domain(&self) -> Domain;

    /// Fetch and map. Errors carry context for the log line only.
    async fn try_fetch(&self) -> Result<Vec<CatalogRecord>>;

    /// Never fails: transport, status, and decode errors yield an empty list.
    async fn fetch(&self) -> Vec<CatalogRecord> {
        let started = Instant::now();
        match self.try_fetch().await {
            Ok(records) => {
                debug!(source = %self.label(), count = records.len(), elapsed_ms = started.elapsed().as_millis() as u64, "source fetched");
                records
            }
            Err(e) => {
                warn!(source = %self.label(), error = %format!("{e:#}"), "source failed, contributing no records");
                Vec::new()
            }
        }
    }
}

/// Shared client for every adapter of one catalog.
pub fn build_client(http: &HttpConfig, user_agent: Option<&str>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().timeout(http.timeout());
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua.to_string());
    }
    builder.build().context("building http client")
}

pub(crate) async fn get_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let resp = request.send().await.context("sending request")?;
    let status = resp.status();
    if !status.is_success() {
        bail!("upstream answered {status}");
    }
    resp.json::<T>().await.context("decoding response body")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    #[async_trait]
    impl SourceAdapter for Failing {
        fn label(&self) -> String { "failing".into() }
        fn domain(&self) -> Domain { Domain::Books }
        async fn try_fetch(&self) -> Result<Vec<CatalogRecord>> { bail!("boom") }
    }

    #[tokio::test]
    async fn failures_are_contained() {
        assert!(Failing.fetch().await.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server.mock("GET", "/x").with_status(503).create_async().await;
        let client = build_client(&HttpConfig::default(), None).unwrap();
        let res: Result<serde_json::Value> = get_json(client.get(format!("{}/x", server.url()))).await;
        assert!(format!("{:#}", res.unwrap_err()).contains("503"));
    }
}
