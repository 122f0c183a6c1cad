//! `hello-version` - greeting CLI with embedded build metadata

use std::io::Write;

use hello_version::cli::commands;
use hello_version::error::{ExitCode, HelloError};

fn main() {
    let mut stdout = std::io::stdout().lock();
    let result = commands::run(std::env::args_os(), &mut stdout)
        .and_then(|()| stdout.flush().map_err(HelloError::from));

    match result {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        // clap renders the message (or help text) and picks the exit code
        Err(HelloError::InvalidArgument(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
