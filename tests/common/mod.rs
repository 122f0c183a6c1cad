//! Shared integration-test harness for running the `hello-version` binary
//! as a child process.

#![allow(dead_code)]

use std::process::{Command, Output};

/// Helpers for invoking the compiled `hello-version` binary.
pub struct HelloProcess;

impl HelloProcess {
    /// Runs the binary with `args` and waits for it to exit.
    ///
    /// `HELLO_VERSION_LOG_LEVEL` is cleared so stderr stays at the default.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::spawn_with_env(args, &[])
    }

    /// Runs the binary with `args` and extra environment variables.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_with_env(args: &[&str], envs: &[(&str, &str)]) -> Output {
        let bin = env!("CARGO_BIN_EXE_hello-version");
        Command::new(bin)
            .args(args)
            .env_remove("HELLO_VERSION_LOG_LEVEL")
            .envs(envs.iter().copied())
            .output()
            .expect("failed to run hello-version")
    }

    /// Standard output of `output` as a string.
    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Standard error of `output` as a string.
    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}
