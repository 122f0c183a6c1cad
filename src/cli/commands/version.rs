//! Version information display
//!
//! Prints version and build metadata in human or JSON format.

use std::io::Write;

use crate::build_info::BuildMetadata;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::version::collect_version_info;

/// Print the version report for `source` to `out`.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub fn run<M: BuildMetadata + ?Sized>(
    format: OutputFormat,
    source: &M,
    out: &mut impl Write,
) -> Result<()> {
    let info = collect_version_info(source);

    match format {
        OutputFormat::Human => {
            writeln!(out, "{info}")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &info)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
