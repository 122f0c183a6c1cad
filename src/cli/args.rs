//! CLI argument definitions
//!
//! Clap derive structs for `hello-version` command-line parsing.

use clap::{ArgAction, Parser, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Print a greeting, or the build metadata of this binary.
// clap's built-in version flag stays disabled; `--version` selects the report.
#[derive(Parser, Debug)]
#[command(name = "hello-version", author, about)]
pub struct Cli {
    /// Print version, commit and build time instead of the greeting.
    #[arg(long, overrides_with = "version")]
    pub version: bool,

    /// Version report format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log output format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,

    /// Color output control for logs.
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for the version report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Version:` / `Commit:` / `Build Time:` lines.
    #[default]
    Human,
    /// Single-line JSON object.
    Json,
}
