//! On-disk JSON store for release catalogs

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::error::StoreError;
use crate::catalog::types::ReleaseCatalog;

/// Reads and writes one catalog document at a fixed path.
///
/// The file is the sole persisted state for its toolchain and is replaced
/// wholesale on every write. There is no locking; concurrent writers race
/// and the last write wins.
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the cache file on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cached catalog, or `None` when the file is missing,
    /// unreadable, or unparsable. Never fails; a corrupt cache reads back
    /// as absent and is overwritten by the next successful refresh.
    pub fn load<R: DeserializeOwned>(&self) -> Option<ReleaseCatalog<R>> {
        if !self.path.exists() {
            return None;
        }

        let contents = match std::fs::read(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!("Failed to read catalog cache {:?}: {}", self.path, err);
                return None;
            }
        };

        match serde_json::from_slice(&contents) {
            Ok(catalog) => Some(catalog),
            Err(err) => {
                debug!("Failed to parse catalog cache {:?}: {}", self.path, err);
                None
            }
        }
    }

    /// Overwrites the cache file with the catalog as pretty-printed JSON
    /// terminated by a single trailing newline.
    pub fn save<R: Serialize>(&self, catalog: &ReleaseCatalog<R>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(catalog)? + "\n";
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
