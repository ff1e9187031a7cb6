//! Tests for the command executor.

use super::*;
use crate::test_support::{FailingReporter, RecordingReporter};

#[test]
fn test_returns_raw_exit_code() {
    let executor = CommandExecutor::new();
    assert_eq!(executor.run_expect_success("true"), 0);
    assert_eq!(executor.run_expect_success("false"), 1);
    assert_eq!(executor.run_expect_success("exit 42"), 42);
}

#[test]
fn test_missing_command_is_127() {
    let executor = CommandExecutor::new();
    assert_eq!(
        executor.run_expect_success("ocf-agent-test-no-such-command"),
        EXIT_NOT_FOUND
    );
}

#[test]
fn test_capture_collects_stdout_then_stderr() {
    let output = capture("echo out; echo err >&2; exit 3");
    assert_eq!(output.exit_code, 3);
    assert_eq!(output.lines, vec!["out", "err"]);
}

#[cfg(unix)]
#[test]
fn test_signal_maps_to_128_plus_signal() {
    let output = capture("kill -9 $$");
    assert_eq!(output.exit_code, 128 + 9);
}

#[test]
fn test_expected_code_is_not_reported() {
    let (reporter, reports) = RecordingReporter::new();
    let executor = CommandExecutor::with_reporter(Box::new(reporter));

    assert_eq!(executor.run("exit 7", &[0, 7]), 7);
    assert_eq!(executor.run_expect_success("true"), 0);
    assert!(reports.borrow().is_empty());
}

#[test]
fn test_unexpected_code_is_reported_once() {
    let (reporter, reports) = RecordingReporter::new();
    let executor = CommandExecutor::with_reporter(Box::new(reporter));

    let code = executor.run_expect_success("echo starting; echo broken >&2; exit 4");
    assert_eq!(code, 4);

    let reports = reports.borrow();
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.exit_code, 4);
    assert_eq!(report.command, "echo starting; echo broken >&2; exit 4");
    assert_eq!(report.output, vec!["starting", "broken"]);
    assert_eq!(report.executable, "echo");
}

#[test]
fn test_report_is_tagged_with_executable_basename() {
    let (reporter, reports) = RecordingReporter::new();
    let executor = CommandExecutor::with_reporter(Box::new(reporter));

    let command = "/bin/sh -c 'echo probing; exit 9'";
    assert_eq!(executor.run_expect_success(command), 9);

    let reports = reports.borrow();
    assert_eq!(reports[0].executable, "sh");
    assert_eq!(reports[0].message, "sh executed with error");
    assert_eq!(reports[0].output, vec!["probing"]);
}

#[test]
fn test_run_unchecked_never_reports() {
    let (reporter, reports) = RecordingReporter::new();
    let executor = CommandExecutor::with_reporter(Box::new(reporter));

    assert_eq!(executor.run_unchecked("exit 6"), 6);
    assert!(reports.borrow().is_empty());
}

#[test]
fn test_reporter_failure_does_not_change_exit_code() {
    let executor = CommandExecutor::with_reporter(Box::new(FailingReporter));
    assert_eq!(executor.run_expect_success("exit 5"), 5);
}

#[test]
fn test_output_is_not_inherited() {
    // Nothing should leak to the test harness; only the captured lines matter.
    let output = capture("printf 'a\\nb\\n'");
    assert_eq!(output.exit_code, 0);
    assert_eq!(output.lines, vec!["a", "b"]);
}

#[test]
fn test_debug_hides_reporter_details() {
    let executor = CommandExecutor::with_reporter(Box::new(FailingReporter));
    assert_eq!(
        format!("{:?}", executor),
        "CommandExecutor { reporter: true }"
    );
    assert!(!CommandExecutor::new().has_reporter());
}
