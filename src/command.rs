//! External command execution boundary.
//!
//! Every probe that shells out goes through [`CommandRunner`], so the
//! text-parsing logic stays unit-testable without invoking the real tools.

use std::io;
use std::process::Command;

/// Runs an external command and captures its stdout.
pub trait CommandRunner {
    /// Returns captured stdout as UTF-8 text.
    ///
    /// Errors only when the command cannot be spawned. Exit status is
    /// deliberately not inspected: `rpm -Va` exits non-zero whenever it
    /// finds variances, and its output is exactly what we want.
    fn output(&self, program: &str, args: &[&str]) -> io::Result<String>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
#[derive(Debug, Default)]
pub struct ShellCommandRunner;

impl CommandRunner for ShellCommandRunner {
    fn output(&self, program: &str, args: &[&str]) -> io::Result<String> {
        let output = Command::new(program).args(args).output()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests;
