//! Node.js release index client

use serde::Deserialize;
use tracing::warn;

use crate::catalog::error::FetchError;
use crate::catalog::source::ReleaseSource;
use crate::catalog::sources::sort_newest_first;
use crate::catalog::types::{NodeRelease, Tool};

/// Default base URL for the Node.js release index
const DEFAULT_BASE_URL: &str = "https://nodejs.org/download/release";

/// One entry of the upstream index.json document
#[derive(Debug, Deserialize)]
struct NodeIndexEntry {
    /// Tag-prefixed version ("v25.6.1")
    version: String,
    date: String,
    #[serde(default)]
    files: Vec<String>,
    npm: Option<String>,
    lts: LtsField,
}

/// The upstream `lts` field carries `false` or the LTS codename string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LtsField {
    Flag(bool),
    Codename(String),
}

impl LtsField {
    fn as_bool(&self) -> bool {
        match self {
            LtsField::Flag(flag) => *flag,
            LtsField::Codename(_) => true,
        }
    }
}

/// Source implementation for the Node.js release index
pub struct NodeReleaseIndex {
    client: reqwest::Client,
    base_url: String,
}

impl NodeReleaseIndex {
    /// Creates a new NodeReleaseIndex with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("enginepin")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for NodeReleaseIndex {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl ReleaseSource for NodeReleaseIndex {
    type Release = NodeRelease;

    fn tool(&self) -> Tool {
        Tool::Node
    }

    fn cache_file_name(&self) -> &'static str {
        "node-versions.json"
    }

    async fn fetch_releases(&self) -> Result<Vec<NodeRelease>, FetchError> {
        let url = format!("{}/index.json", self.base_url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Node release index returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let entries: Vec<NodeIndexEntry> = response.json().await.map_err(|e| {
            warn!("Failed to parse Node release index: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        let releases = entries
            .into_iter()
            .map(|entry| NodeRelease {
                version: entry
                    .version
                    .strip_prefix('v')
                    .unwrap_or(&entry.version)
                    .to_string(),
                date: entry.date,
                files: entry.files,
                npm: entry.npm,
                lts: entry.lts.as_bool(),
            })
            .collect();

        Ok(sort_newest_first(releases))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_releases_normalizes_entries_and_orders_newest_first() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/index.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"version": "v24.13.1", "date": "2026-01-13", "files": ["linux-x64", "osx-arm64-tar"], "npm": "11.10.0", "lts": "Krypton", "security": false},
                    {"version": "v25.6.1", "date": "2026-02-09", "files": ["linux-x64"], "npm": "11.10.1", "lts": false, "security": true},
                    {"version": "v22.22.0", "date": "2025-12-02", "files": ["linux-x64"], "npm": "10.9.4", "lts": false}
                ]"#,
            )
            .create_async()
            .await;

        let source = NodeReleaseIndex::new(&server.url());
        let releases = source.fetch_releases().await.unwrap();

        mock.assert_async().await;

        let versions: Vec<&str> = releases.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["25.6.1", "24.13.1", "22.22.0"]);

        // Codename strings normalize to true, booleans pass through
        assert!(!releases[0].lts);
        assert!(releases[1].lts);
        assert_eq!(releases[0].npm.as_deref(), Some("11.10.1"));
        assert_eq!(releases[0].date, "2026-02-09");
    }

    #[tokio::test]
    async fn fetch_releases_accepts_entries_without_an_npm_field() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/index.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"version": "v0.1.14", "date": "2011-08-26", "files": ["src"], "lts": false}
                ]"#,
            )
            .create_async()
            .await;

        let source = NodeReleaseIndex::new(&server.url());
        let releases = source.fetch_releases().await.unwrap();

        mock.assert_async().await;
        assert_eq!(releases[0].version, "0.1.14");
        assert_eq!(releases[0].npm, None);
    }

    #[tokio::test]
    async fn fetch_releases_fails_on_error_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/index.json")
            .with_status(503)
            .create_async()
            .await;

        let source = NodeReleaseIndex::new(&server.url());
        let result = source.fetch_releases().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_releases_fails_on_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/index.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not an index")
            .create_async()
            .await;

        let source = NodeReleaseIndex::new(&server.url());
        let result = source.fetch_releases().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }
}
