//! `hello-version` - greeting CLI with embedded build metadata
//!
//! Prints `hello world`, or with `--version` a report of the version,
//! short commit hash and build time captured when the binary was built.

pub mod build_info;
pub mod cli;
pub mod error;
pub mod observability;
pub mod version;
