//! Observability module
//!
//! Diagnostic logging to stderr. Standard output carries only the
//! greeting or the version report.

pub mod logging;

pub use logging::{LogFormat, init_logging};
