//! Build metadata sources
//!
//! The version report reads its fields through [`BuildMetadata`] so the
//! formatting logic never touches compile-time constants directly.
//! [`EmbeddedMetadata`] serves the values `build.rs` captured for this
//! binary; [`StaticMetadata`] serves caller-supplied values.

/// Constants generated by the `built` crate during `build.rs`.
#[allow(dead_code, clippy::all, clippy::pedantic, clippy::nursery)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Version override captured from the build environment.
const VERSION_OVERRIDE: Option<&str> = option_env!("HELLO_VERSION");

/// A source of build metadata.
///
/// Every accessor returns `None` when the value is unavailable; callers
/// decide how absence is rendered.
pub trait BuildMetadata {
    /// Semantic version of the build.
    fn version(&self) -> Option<&str>;

    /// Full source-control revision identifier.
    fn revision(&self) -> Option<&str>;

    /// Build timestamp, in whatever format the source records it.
    fn build_time(&self) -> Option<&str>;
}

/// Metadata embedded into this binary at compile time.
///
/// The version comes from `HELLO_VERSION` when it was set for the build,
/// otherwise from the package manifest. The revision is absent for builds
/// made outside a git checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbeddedMetadata;

impl BuildMetadata for EmbeddedMetadata {
    fn version(&self) -> Option<&str> {
        non_empty(VERSION_OVERRIDE).or_else(|| non_empty(Some(built_info::PKG_VERSION)))
    }

    fn revision(&self) -> Option<&str> {
        non_empty(built_info::GIT_COMMIT_HASH)
    }

    fn build_time(&self) -> Option<&str> {
        non_empty(Some(built_info::BUILT_TIME_UTC))
    }
}

/// Metadata held as plain owned values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticMetadata {
    /// Semantic version.
    pub version: Option<String>,
    /// Full revision identifier.
    pub revision: Option<String>,
    /// Build timestamp.
    pub build_time: Option<String>,
}

impl StaticMetadata {
    /// Metadata with every field absent.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl BuildMetadata for StaticMetadata {
    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    fn build_time(&self) -> Option<&str> {
        self.build_time.as_deref()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
