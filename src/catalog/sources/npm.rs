//! npm registry client

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::warn;

use crate::catalog::error::FetchError;
use crate::catalog::source::ReleaseSource;
use crate::catalog::sources::sort_newest_first;
use crate::catalog::types::{NpmRelease, Tool};

/// Default base URL for the npm registry
const DEFAULT_BASE_URL: &str = "https://registry.npmjs.org";

/// Package whose published versions make up the npm catalog
const PACKAGE_NAME: &str = "npm";

/// Packument subset. IndexMap keeps the registry's key order so the
/// publication sequence survives deserialization.
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    versions: IndexMap<String, serde_json::Value>,
}

/// Source implementation for the npm registry
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry with a custom base URL
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

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl ReleaseSource for NpmRegistry {
    type Release = NpmRelease;

    fn tool(&self) -> Tool {
        Tool::Npm
    }

    fn cache_file_name(&self) -> &'static str {
        "npm-versions.json"
    }

    async fn fetch_releases(&self) -> Result<Vec<NpmRelease>, FetchError> {
        let url = format!("{}/{}", self.base_url, PACKAGE_NAME);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("npm registry returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let package: NpmPackageResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse npm registry response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        // The registry lists versions oldest first
        let releases = package
            .versions
            .into_keys()
            .rev()
            .map(NpmRelease)
            .collect();

        Ok(sort_newest_first(releases))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_releases_orders_published_versions_newest_first() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/npm")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "name": "npm",
                    "versions": {
                        "9.9.4": {"name": "npm"},
                        "11.10.1": {"name": "npm"},
                        "12.0.0-pre.1": {"name": "npm"}
                    }
                }"#,
            )
            .create_async()
            .await;

        let source = NpmRegistry::new(&server.url());
        let releases = source.fetch_releases().await.unwrap();

        mock.assert_async().await;

        let versions: Vec<&str> = releases.iter().map(|r| r.0.as_str()).collect();
        assert_eq!(versions, vec!["12.0.0-pre.1", "11.10.1", "9.9.4"]);
    }

    #[tokio::test]
    async fn fetch_releases_fails_on_error_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/npm")
            .with_status(500)
            .create_async()
            .await;

        let source = NpmRegistry::new(&server.url());
        let result = source.fetch_releases().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }
}
