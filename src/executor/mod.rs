//! Subprocess execution for resource agents.
//!
//! Commands run through `sh -c` so agents can use ordinary shell syntax.
//! Output is captured rather than inherited: an agent's stdout is reserved
//! for the metadata descriptor, and a command's own chatter only matters when
//! it fails and gets reported.
//!
//! The executor never fails. A command that cannot even be started is
//! reported as exit code 127, the shell's "command not found".

use crate::diagnostics::{FailureReport, Reporter};
use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

/// Exit code for a command that could not be found or started.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Outcome of one command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: i32,
    /// Captured stdout lines followed by stderr lines.
    pub lines: Vec<String>,
}

/// Runs shell commands and reports unexpected exit codes.
#[derive(Default)]
pub struct CommandExecutor {
    reporter: Option<Box<dyn Reporter>>,
}

impl fmt::Debug for CommandExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandExecutor")
            .field("reporter", &self.reporter.is_some())
            .finish()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reporter(reporter: Box<dyn Reporter>) -> Self {
        Self {
            reporter: Some(reporter),
        }
    }

    pub fn set_reporter(&mut self, reporter: Option<Box<dyn Reporter>>) {
        self.reporter = reporter;
    }

    pub fn has_reporter(&self) -> bool {
        self.reporter.is_some()
    }

    /// Run `command`, expecting exit code 0.
    pub fn run_expect_success(&self, command: &str) -> i32 {
        self.run(command, &[0])
    }

    /// Run `command` and return its exit code.
    ///
    /// Codes outside `expected_exit_codes` are forwarded to the reporter, if
    /// one is configured. Reporter failures are logged and otherwise ignored.
    pub fn run(&self, command: &str, expected_exit_codes: &[i32]) -> i32 {
        let output = capture(command);

        if !expected_exit_codes.contains(&output.exit_code) {
            tracing::debug!(
                command,
                exit_code = output.exit_code,
                "command exited with unexpected code"
            );
            self.report(command, output.lines, output.exit_code);
        }

        output.exit_code
    }

    /// Run `command` and return its exit code without ever reporting it.
    ///
    /// For probes where any exit code is a legitimate answer.
    pub fn run_unchecked(&self, command: &str) -> i32 {
        capture(command).exit_code
    }

    fn report(&self, command: &str, lines: Vec<String>, exit_code: i32) {
        let Some(reporter) = &self.reporter else {
            return;
        };

        let report = FailureReport::new(command, lines, exit_code);
        if let Err(e) = reporter.report(&report) {
            tracing::warn!(error = %e, command, "failed to report command failure");
        }
    }
}

/// Run `command` through the shell and capture everything it prints.
pub fn capture(command: &str) -> CommandOutput {
    let output = match Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(error = %e, command, "failed to spawn shell");
            return CommandOutput {
                exit_code: EXIT_NOT_FOUND,
                lines: vec![e.to_string()],
            };
        }
    };

    let lines = String::from_utf8_lossy(&output.stdout)
        .lines()
        .chain(String::from_utf8_lossy(&output.stderr).lines())
        .map(str::to_string)
        .collect();

    CommandOutput {
        exit_code: status_code(output.status),
        lines,
    }
}

#[cfg(unix)]
fn status_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn status_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

#[cfg(test)]
mod tests;
