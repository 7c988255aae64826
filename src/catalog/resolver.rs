//! Version resolution against a release catalog
//!
//! A specifier is either the keyword `latest`, the keyword `lts`, an
//! exact version, or a semver range. Resolution walks the catalog in
//! its newest-first order, so the first match is always the most
//! recent release that satisfies the specifier.

use semver::{Version, VersionReq};
use tracing::warn;

use crate::catalog::types::{Release, Tool};

/// Resolves a version specifier against releases ordered newest first.
///
/// Returns `None` when nothing in the catalog satisfies the specifier,
/// logging a single diagnostic in that case.
pub fn resolve_version<R: Release>(tool: Tool, releases: &[R], specifier: &str) -> Option<String> {
    let resolved = match specifier {
        "latest" => releases.first().map(|r| r.version().to_string()),
        "lts" => releases
            .iter()
            .find(|r| r.is_long_term_support())
            .map(|r| r.version().to_string()),
        _ => resolve_semver(releases, specifier),
    };

    if resolved.is_none() {
        warn!(
            "Desired {} version cannot be found: {}",
            tool.display_name(),
            specifier
        );
    }

    resolved
}

/// Matches an exact version if the catalog contains it, otherwise the
/// newest release satisfying the specifier parsed as a range.
fn resolve_semver<R: Release>(releases: &[R], specifier: &str) -> Option<String> {
    if let Ok(exact) = Version::parse(specifier) {
        let canonical = exact.to_string();
        if releases.iter().any(|r| r.version() == canonical) {
            return Some(canonical);
        }
    }

    let range = VersionReq::parse(specifier).ok()?;
    releases
        .iter()
        .find(|r| {
            Version::parse(r.version())
                .map(|v| range.matches(&v))
                .unwrap_or(false)
        })
        .map(|r| r.version().to_string())
}
