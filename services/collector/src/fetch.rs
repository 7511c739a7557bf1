//! Fetching table payloads over HTTP or from disk.

use crate::delimited::parse_delimited_bytes;
use crate::gviz::parse_response;
use crate::source::{is_remote, TableSource};
use crate::table::RawRow;
use crate::workbook::read_workbook;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::time::Duration;
use tokio::fs;
use tracing::info;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "comment-dashboard/0.1".to_string(),
        }
    }
}

impl FetchConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            user_agent: std::env::var("HTTP_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}

/// Raw bytes of a fetched table and their SHA-256 fingerprint.
#[derive(Debug, Clone)]
pub struct Payload {
    pub bytes: Vec<u8>,
    pub fingerprint: String,
}

/// Rows decoded from one source.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub rows: Vec<RawRow>,
    pub fingerprint: String,
}

/// `sha256:<hex>` digest of a payload.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}

pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch a URL, or read a local file for any other location.
    pub async fn fetch(&self, location: &str) -> Result<Payload> {
        let (bytes, content_type) = if is_remote(location) {
            info!(url = location, "fetching");
            let resp = self
                .client
                .get(location)
                .send()
                .await
                .with_context(|| format!("HTTP request to {} failed", location))?
                .error_for_status()
                .context("HTTP request failed")?;

            let content_type = resp
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            let bytes = resp.bytes().await.context("Failed to read response body")?;
            (bytes.to_vec(), content_type)
        } else {
            info!(path = location, "reading");
            let bytes = fs::read(location)
                .await
                .with_context(|| format!("Failed to read {}", location))?;
            (bytes, None)
        };

        let fingerprint = fingerprint(&bytes);
        info!(
            size_bytes = bytes.len(),
            content_type = content_type.as_deref().unwrap_or("-"),
            %fingerprint,
            "payload received"
        );

        Ok(Payload { bytes, fingerprint })
    }

    /// Fetch and decode a table into rows keyed by header.
    pub async fn load_table(&self, source: &TableSource) -> Result<LoadedTable> {
        let table = match source {
            TableSource::JsonTable { location } => {
                let payload = self.fetch(location).await?;
                let text = String::from_utf8_lossy(&payload.bytes);
                LoadedTable {
                    rows: parse_response(&text)
                        .with_context(|| format!("Failed to parse JSON table from {}", location))?,
                    fingerprint: payload.fingerprint,
                }
            }
            TableSource::Delimited { location } => {
                let payload = self.fetch(location).await?;
                LoadedTable {
                    rows: parse_delimited_bytes(&payload.bytes)
                        .with_context(|| format!("Failed to parse CSV from {}", location))?,
                    fingerprint: payload.fingerprint,
                }
            }
            TableSource::Workbook { path, sheet } => {
                let bytes = fs::read(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                LoadedTable {
                    rows: read_workbook(path, sheet.as_deref())?,
                    fingerprint: fingerprint(&bytes),
                }
            }
        };

        info!(
            source = %source,
            format = source.format_name(),
            rows = table.rows.len(),
            "table loaded"
        );
        Ok(table)
    }
}
