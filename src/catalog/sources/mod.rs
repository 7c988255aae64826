//! Concrete release sources for each toolchain

pub mod node;
pub mod npm;

pub use node::NodeReleaseIndex;
pub use npm::NpmRegistry;

use semver::Version;

use crate::catalog::types::Release;

/// Order releases newest first by semver precedence.
///
/// The resolver relies on index 0 being the most recent release, so upstream
/// response order is not trusted. Entries whose version does not parse are
/// dropped.
pub(crate) fn sort_newest_first<R: Release>(releases: Vec<R>) -> Vec<R> {
    let mut keyed: Vec<(Version, R)> = releases
        .into_iter()
        .filter_map(|release| {
            Version::parse(release.version())
                .ok()
                .map(|parsed| (parsed, release))
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    keyed.into_iter().map(|(_, release)| release).collect()
}
