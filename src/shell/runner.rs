//! The command-running seam used by every check.
//!
//! Checks only need "run this command line in this directory and give me
//! its text". [`Shell`] is that capability; [`SystemShell`] backs it with a
//! real process and folds every failure into an empty string.

use std::path::Path;

use super::command::execute_quiet;

/// Runs a textual command line and returns its output.
///
/// Implementations must never fail: a command that cannot be spawned or
/// exits non-zero yields an empty string.
pub trait Shell {
    /// Run `command` with `cwd` as working directory.
    fn run(&self, command: &str, cwd: &Path) -> String;
}

/// Shell backed by real process execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn run(&self, command: &str, cwd: &Path) -> String {
        match execute_quiet(command, Some(cwd)) {
            Ok(result) if result.success => {
                tracing::debug!(
                    command,
                    duration_ms = result.duration.as_millis() as u64,
                    "command succeeded"
                );
                result.combined_output()
            }
            Ok(result) => {
                tracing::debug!(command, code = ?result.exit_code, "command exited non-zero");
                String::new()
            }
            Err(e) => {
                tracing::debug!(command, error = %e, "command could not run");
                String::new()
            }
        }
    }
}

/// Quote a string for a POSIX shell command line.
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
