//! Failure report payload.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Details of a command that exited with an unexpected code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReport {
    /// Human-readable summary, e.g. `attrd_updater executed with error`.
    pub message: String,
    /// Basename of the executable that failed.
    pub executable: String,
    /// Full command line as handed to the shell.
    pub command: String,
    /// Captured stdout and stderr lines.
    pub output: Vec<String>,
    pub exit_code: i32,
    pub timestamp: DateTime<Utc>,
    /// Host the agent ran on.
    pub server_name: String,
}

impl FailureReport {
    pub fn new(command: &str, output: Vec<String>, exit_code: i32) -> Self {
        let executable = executable_name(command);
        Self {
            message: format!("{} executed with error", executable),
            executable,
            command: command.to_string(),
            output,
            exit_code,
            timestamp: Utc::now(),
            server_name: server_name(),
        }
    }
}

/// Basename of the first word of a shell command line.
pub fn executable_name(command: &str) -> String {
    let first = shell_words::split(command)
        .ok()
        .and_then(|words| words.into_iter().next())
        .or_else(|| command.split_whitespace().next().map(str::to_string))
        .unwrap_or_default();

    Path::new(&first)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or(first)
}

fn server_name() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}
