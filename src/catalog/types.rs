//! Common types for release catalogs

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Toolchain whose releases are cataloged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// The Node.js runtime
    Node,
    /// The npm package manager bundled with Node.js
    Npm,
}

impl Tool {
    /// Returns the string representation of the tool
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Node => "node",
            Tool::Npm => "npm",
        }
    }

    /// Returns the capitalized name used in user-facing messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Node => "Node",
            Tool::Npm => "npm",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tool {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(Tool::Node),
            "npm" => Ok(Tool::Npm),
            _ => Err(()),
        }
    }
}

/// One release record of a toolchain.
///
/// The resolver only needs the exact version string and whether the release
/// counts as long-term support; everything else a record carries is
/// informational and travels through the cache untouched.
pub trait Release: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Exact version string, no leading tag character
    fn version(&self) -> &str;

    /// Whether this release counts as a long-term-support release
    fn is_long_term_support(&self) -> bool;
}

/// One Node.js release as kept in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRelease {
    /// The Node.js version ("25.6.1")
    pub version: String,
    /// Release publish date ("2026-02-09")
    pub date: String,
    /// Names of the published artifacts for this release
    #[serde(default)]
    pub files: Vec<String>,
    /// The npm version shipped with this release, absent for the oldest ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm: Option<String>,
    /// Whether this is a Long Term Support (LTS) release
    pub lts: bool,
}

impl Release for NodeRelease {
    fn version(&self) -> &str {
        &self.version
    }

    fn is_long_term_support(&self) -> bool {
        self.lts
    }
}

/// One npm release. The registry publishes nothing beyond the version
/// string, so the record serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NpmRelease(pub String);

impl Release for NpmRelease {
    fn version(&self) -> &str {
        &self.0
    }

    /// npm has no LTS designation; the newest non-prerelease release is
    /// treated as the LTS equivalent.
    fn is_long_term_support(&self) -> bool {
        !self.0.contains('-')
    }
}

/// The cached, timestamped release snapshot for one toolchain.
///
/// `releases` is ordered newest first; index 0 is always the most recent
/// release. Both the `latest` tag and range matching rely on this ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseCatalog<R> {
    /// Epoch milliseconds of the last cache write
    #[serde(rename = "date")]
    pub cached_at: i64,
    /// Release records, newest first
    #[serde(rename = "data")]
    pub releases: Vec<R>,
}

impl<R> ReleaseCatalog<R> {
    pub fn new(cached_at: i64, releases: Vec<R>) -> Self {
        Self {
            cached_at,
            releases,
        }
    }
}
