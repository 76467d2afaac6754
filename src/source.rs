//! Where earthquake collections come from.
//!
//! The aggregators never see this module: a source hands back a parsed
//! [`EventCollection`] and the caller takes it from there.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::fetch::{HttpClient, fetch_bytes};
use crate::parser::parse_collection;
use crate::query::EventQuery;
use crate::record::EventCollection;

/// Anything that can produce a parsed earthquake collection.
#[async_trait]
pub trait EventSource {
    async fn load_events(&self) -> Result<EventCollection>;
}

/// The live USGS event service.
pub struct UsgsFeed<C> {
    pub client: C,
    pub base_url: String,
    pub query: EventQuery,
}

impl<C: HttpClient> UsgsFeed<C> {
    pub fn new(client: C, base_url: impl Into<String>, query: EventQuery) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            query,
        }
    }

    /// Fetches the raw GeoJSON document without parsing it, for caching to a
    /// snapshot file.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_raw(&self) -> Result<Vec<u8>> {
        let url = self.query.to_url(&self.base_url)?;
        debug!(%url, "Querying earthquake feed");
        fetch_bytes(&self.client, url.as_str())
            .await
            .context("earthquake feed request failed")
    }
}

#[async_trait]
impl<C: HttpClient> EventSource for UsgsFeed<C> {
    async fn load_events(&self) -> Result<EventCollection> {
        let bytes = self.fetch_raw().await?;
        let events = parse_collection(&bytes)?;
        info!(events = events.len(), "Earthquake feed parsed");
        Ok(events)
    }
}

/// A previously saved feed document on disk.
pub struct SnapshotFile {
    pub path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventSource for SnapshotFile {
    async fn load_events(&self) -> Result<EventCollection> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read snapshot {}", self.path.display()))?;
        let events = parse_collection(&bytes)
            .with_context(|| format!("failed to parse snapshot {}", self.path.display()))?;
        info!(path = %self.path.display(), events = events.len(), "Snapshot loaded");
        Ok(events)
    }
}

/// Writes raw feed bytes to `path`, creating parent directories.
pub fn save_snapshot(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create snapshot directory {}", parent.display()))?;
    }
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "Snapshot saved");
    Ok(())
}
