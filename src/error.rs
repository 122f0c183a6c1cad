//! Error types for `hello-version`
//!
//! The CLI has two failure modes worth reporting: bad arguments and a
//! failed write to standard output. Missing build metadata is never an
//! error; it shows up as empty report fields instead.

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `hello-version`.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Usage error (unrecognized or malformed arguments), matching clap
    pub const USAGE_ERROR: i32 = 2;

    /// I/O error (standard output closed or unwritable)
    pub const IO_ERROR: i32 = 3;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `hello-version` operations.
#[derive(Debug, Error)]
pub enum HelloError {
    /// Command-line arguments could not be parsed.
    ///
    /// Also carries clap's `--help` display request, which is not a
    /// failure and exits 0.
    #[error(transparent)]
    InvalidArgument(#[from] clap::Error),

    /// Writing to standard output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of the version report failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HelloError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(e) => e.exit_code(),
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

/// Result type alias for `hello-version` operations.
pub type Result<T> = std::result::Result<T, HelloError>;
