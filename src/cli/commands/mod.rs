//! CLI command dispatch and handlers
//!
//! Routes a parsed invocation to the greeting or the version report.

pub mod greet;
pub mod version;

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;

use crate::build_info::{BuildMetadata, EmbeddedMetadata};
use crate::cli::args::Cli;
use crate::error::Result;
use crate::observability::init_logging;

/// Parse `args` (program name first), start logging, and run the selected
/// path against the metadata embedded in this binary.
///
/// # Errors
///
/// Returns [`HelloError::InvalidArgument`](crate::error::HelloError::InvalidArgument)
/// for unrecognized or malformed arguments, or an I/O error if writing to
/// `out` fails.
pub fn run<I, T>(args: I, out: &mut impl Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    dispatch(&cli, &EmbeddedMetadata, out)
}

/// Dispatch a parsed CLI invocation.
///
/// # Errors
///
/// Returns an error if the selected handler fails to write its output.
pub fn dispatch<M: BuildMetadata + ?Sized>(
    cli: &Cli,
    source: &M,
    out: &mut impl Write,
) -> Result<()> {
    if cli.version {
        tracing::debug!(format = ?cli.format, "printing version report");
        version::run(cli.format, source, out)
    } else {
        tracing::debug!("printing greeting");
        greet::run(out)
    }
}
