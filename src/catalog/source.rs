//! Release source trait for fetching toolchain release indexes

#[cfg(test)]
use mockall::automock;

use crate::catalog::error::FetchError;
#[cfg(test)]
use crate::catalog::types::NodeRelease;
use crate::catalog::types::{Release, Tool};

/// Trait for fetching the full release index of one toolchain
#[cfg_attr(test, automock(type Release = NodeRelease;))]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Release record shape this source produces
    type Release: Release;

    /// Returns the toolchain this source serves
    fn tool(&self) -> Tool;

    /// File name of the on-disk catalog cache for this toolchain
    fn cache_file_name(&self) -> &'static str;

    /// Fetches every known release from upstream
    ///
    /// # Returns
    /// * `Ok(releases)` - All releases, ordered from newest to oldest
    /// * `Err(FetchError)` - If the request fails or the response is unusable
    async fn fetch_releases(&self) -> Result<Vec<Self::Release>, FetchError>;
}
