//! Greeting output
//!
//! Default behavior when `--version` is not given.

use std::io::Write;

use crate::error::Result;

/// The line printed on the greeting path.
pub const GREETING: &str = "hello world";

/// Write the greeting line to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{GREETING}")?;
    Ok(())
}
