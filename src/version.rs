//! Version report model
//!
//! [`VersionInfo`] is built fresh from a [`BuildMetadata`] source each time
//! the report is requested and is never cached.

use std::fmt;

use serde::Serialize;

use crate::build_info::BuildMetadata;

/// Number of revision characters shown in the report.
pub const SHORT_REVISION_LEN: usize = 7;

/// Version metadata for one report.
///
/// Fields are empty strings when the metadata source had no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Semantic version.
    pub version: String,
    /// Revision prefix, at most [`SHORT_REVISION_LEN`] characters.
    pub commit_hash: String,
    /// Build timestamp.
    pub build_time: String,
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Version: {}\nCommit: {}\nBuild Time: {}",
            self.version, self.commit_hash, self.build_time
        )
    }
}

/// Collects a [`VersionInfo`] from `source`.
///
/// Never fails: absent metadata yields empty fields.
#[must_use]
pub fn collect_version_info<M: BuildMetadata + ?Sized>(source: &M) -> VersionInfo {
    let info = VersionInfo {
        version: source.version().unwrap_or_default().to_string(),
        commit_hash: source.revision().map(short_revision).unwrap_or_default().to_string(),
        build_time: source.build_time().unwrap_or_default().to_string(),
    };
    tracing::debug!(
        version = %info.version,
        commit = %info.commit_hash,
        build_time = %info.build_time,
        "collected build metadata"
    );
    info
}

/// Returns the first [`SHORT_REVISION_LEN`] characters of `revision`.
///
/// Shorter identifiers are returned whole. Counting is by `char`, so the
/// cut never lands inside a multi-byte code point.
#[must_use]
pub fn short_revision(revision: &str) -> &str {
    match revision.char_indices().nth(SHORT_REVISION_LEN) {
        Some((end, _)) => &revision[..end],
        None => revision,
    }
}
