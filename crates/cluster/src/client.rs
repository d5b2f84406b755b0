//! Cluster client implementation using reqwest.

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use reaper_core::{Cluster, DeleteOutcome};
use reqwest::{Client, Url};

use crate::error::{Error, Result};
use crate::response;

/// Tracing target for cluster client operations.
pub const TRACING_TARGET: &str = "cluster::http";

/// Where the cluster lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Host name, optionally with an `http://` or `https://` scheme.
    pub host: String,
    pub port: u16,
    /// Applied to every request.
    pub timeout: Duration,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9200,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClusterConfig {
    /// Base URL of the REST API.
    pub fn endpoint(&self) -> Result<Url> {
        let raw = if self.host.contains("://") {
            format!("{}:{}/", self.host.trim_end_matches('/'), self.port)
        } else {
            format!("http://{}:{}/", self.host, self.port)
        };
        let url = Url::parse(&raw).map_err(|_| Error::InvalidEndpoint(raw.clone()))?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(Error::InvalidEndpoint(raw));
        }
        Ok(url)
    }
}

/// HTTP client for an Elasticsearch-compatible cluster.
#[derive(Debug, Clone)]
pub struct HttpCluster {
    http: Client,
    base: Url,
}

impl HttpCluster {
    /// Creates a client for the configured endpoint.
    ///
    /// No request is made until the first operation.
    pub fn new(config: &ClusterConfig) -> Result<Self> {
        let base = config.endpoint()?;
        tracing::debug!(
            target: TRACING_TARGET,
            endpoint = %base,
            timeout_secs = config.timeout.as_secs(),
            "Creating cluster client"
        );

        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, base })
    }

    pub fn endpoint(&self) -> &Url {
        &self.base
    }

    /// URL with `segments` appended to the base path, each one escaped.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidEndpoint(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        tracing::debug!(target: TRACING_TARGET, %url, "GET");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch_indices(&self) -> Result<BTreeSet<String>> {
        let mut url = self.url(&["_cat", "indices"])?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("h", "index");
        let body = self.get_bytes(url).await?;
        response::parse_index_listing(&body)
    }

    async fn fetch_primary_size(&self, index: &str) -> Result<u64> {
        let url = self.url(&[index, "_stats", "store"])?;
        let body = self.get_bytes(url).await?;
        response::parse_primary_size(index, &body)
    }

    async fn send_delete(&self, index: &str) -> Result<DeleteOutcome> {
        let url = self.url(&[index])?;
        tracing::debug!(target: TRACING_TARGET, %url, "DELETE");
        let response = self.http.delete(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(response::parse_delete_response(status, &body))
    }
}

#[async_trait]
impl Cluster for HttpCluster {
    async fn list_indices(&self) -> reaper_core::Result<BTreeSet<String>> {
        let indices = self
            .fetch_indices()
            .await
            .map_err(|err| err.into_core("index listing"))?;
        tracing::info!(target: TRACING_TARGET, count = indices.len(), "Listed indices");
        Ok(indices)
    }

    async fn primary_size_bytes(&self, index: &str) -> reaper_core::Result<u64> {
        self.fetch_primary_size(index)
            .await
            .map_err(|err| err.into_core("size query"))
    }

    async fn delete_index(&self, index: &str) -> reaper_core::Result<DeleteOutcome> {
        self.send_delete(index)
            .await
            .map_err(|err| err.into_core("delete"))
    }
}
