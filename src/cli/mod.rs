//! Command-line interface
//!
//! Argument parsing and the greeting / version-report handlers.

pub mod args;
pub mod commands;
