//! Catalog refresh over a cached release snapshot
//!
//! `CatalogService` ties one `ReleaseSource` to one on-disk cache file.
//! A refresh prefers the cache while it is fresh, otherwise fetches the
//! full release index and persists it when it has grown. Upstream and
//! disk failures degrade to whatever snapshot is still available.

use tracing::{debug, warn};

use crate::catalog::resolver::resolve_version;
use crate::catalog::source::ReleaseSource;
use crate::catalog::store::CatalogStore;
use crate::catalog::types::{ReleaseCatalog, Tool};
use crate::config;

/// Keeps the release catalog of one toolchain current
pub struct CatalogService<S: ReleaseSource> {
    source: S,
    store: CatalogStore,
    cool_down_ms: i64,
}

impl<S: ReleaseSource> CatalogService<S> {
    /// Creates a service over an explicit cache location and cool-down
    pub fn new(source: S, store: CatalogStore, cool_down_ms: i64) -> Self {
        Self {
            source,
            store,
            cool_down_ms,
        }
    }

    /// Creates a service caching under the standard data directory
    pub fn with_default_store(source: S) -> Self {
        let path = config::data_dir().join(source.cache_file_name());
        Self::new(source, CatalogStore::new(path), config::API_COOL_DOWN_MS)
    }

    /// Returns the toolchain this service serves
    pub fn tool(&self) -> Tool {
        self.source.tool()
    }

    /// Returns the current release catalog, refreshing it from upstream
    /// when the cached snapshot is stale.
    ///
    /// Fetched data is always returned to the caller; the on-disk snapshot
    /// is only replaced when the release count grew. Returns `None` only
    /// when there is neither a cached nor a fetchable catalog.
    pub async fn refresh(&self) -> Option<ReleaseCatalog<S::Release>> {
        let cached = self.store.load::<S::Release>();

        if let Some(catalog) = &cached
            && !catalog.releases.is_empty()
            && current_timestamp_ms() - catalog.cached_at < self.cool_down_ms
        {
            debug!("Using cached {} catalog, cool-down active", self.tool());
            return cached;
        }

        let releases = match self.source.fetch_releases().await {
            Ok(releases) if releases.is_empty() => {
                warn!(
                    "{} release source returned no releases",
                    self.tool().display_name()
                );
                return cached;
            }
            Ok(releases) => releases,
            Err(e) => {
                warn!(
                    "Failed to fetch {} releases: {}",
                    self.tool().display_name(),
                    e
                );
                return cached;
            }
        };

        let fresh = ReleaseCatalog::new(current_timestamp_ms(), releases);

        let cached_len = cached.map(|c| c.releases.len()).unwrap_or(0);
        if fresh.releases.len() > cached_len {
            if let Err(e) = self.store.save(&fresh) {
                warn!(
                    "Failed to save {} catalog to {}: {}",
                    self.tool(),
                    self.store.path().display(),
                    e
                );
            }
        } else {
            debug!("{} catalog has not grown, keeping snapshot on disk", self.tool());
        }

        Some(fresh)
    }

    /// Resolves a version specifier against the refreshed catalog
    pub async fn resolve(&self, specifier: &str) -> Option<String> {
        let catalog = self.refresh().await;
        let releases = catalog
            .as_ref()
            .map(|c| c.releases.as_slice())
            .unwrap_or(&[]);

        resolve_version(self.tool(), releases, specifier)
    }
}

/// Get current timestamp in milliseconds since UNIX epoch
fn current_timestamp_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system time before UNIX epoch")
        .as_millis() as i64
}
