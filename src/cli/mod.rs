//! Command-line entry point for resource agent executables.
//!
//! Uses clap derive macros for argument parsing. An agent binary's `main`
//! is a one-liner:
//!
//! ```no_run
//! # use ocf_agent::agents::NodeAttribute;
//! fn main() -> std::process::ExitCode {
//!     ocf_agent::cli::run_agent(NodeAttribute::new())
//! }
//! ```

use crate::agent::ResourceAgent;
use crate::config::{EnvSource, ProcessEnv};
use crate::dispatch::dispatch;
use crate::exit_codes::OcfStatus;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// OCF resource agent.
///
/// Configuration is read from `OCF_RESKEY_<parameter>` environment variables.
/// Run the `meta-data` action to list parameters and actions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Action to perform: start, stop, monitor, validate-all, meta-data, ...
    pub action: String,
}

/// Parse arguments, set up logging, and run the requested action.
pub fn run_agent<A: ResourceAgent>(mut agent: A) -> ExitCode {
    init_logging();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_agent_with(&mut agent, std::env::args_os(), &ProcessEnv, &mut out).into()
}

/// Testable core of [`run_agent`].
///
/// `--help` and `--version` succeed; any other argument error is `ERR_ARGS`.
pub fn run_agent_with<A, I, T, E, W>(agent: &mut A, args: I, env: &E, out: &mut W) -> OcfStatus
where
    A: ResourceAgent,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    E: EnvSource,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                OcfStatus::ErrArgs
            } else {
                OcfStatus::Success
            };
        }
    };

    dispatch(agent, &cli.action, env, out)
}

/// Install a stderr logger filtered by `RUST_LOG` (default: `warn`).
///
/// Stdout is left untouched for the metadata descriptor.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Foo, env};

    fn run(args: &[&str]) -> (OcfStatus, String) {
        let mut out = Vec::new();
        let status = run_agent_with(&mut Foo::new(), args.iter().copied(), &env(&[]), &mut out);
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_action_argument_is_dispatched() {
        assert_eq!(run(&["foo", "validate-all"]).0, OcfStatus::Success);
        assert_eq!(run(&["foo", "start"]).0, OcfStatus::ErrUnimplemented);
        assert_eq!(run(&["foo", "bogus-action"]).0, OcfStatus::ErrUnimplemented);
    }

    #[test]
    fn test_meta_data_goes_to_output() {
        let (status, out) = run(&["foo", "meta-data"]);
        assert_eq!(status, OcfStatus::Success);
        assert!(out.contains("<resource-agent name=\"Foo\""));
    }

    #[test]
    fn test_missing_action_is_err_args() {
        assert_eq!(run(&["foo"]).0, OcfStatus::ErrArgs);
    }

    #[test]
    fn test_extra_arguments_are_err_args() {
        assert_eq!(run(&["foo", "start", "stop"]).0, OcfStatus::ErrArgs);
    }

    #[test]
    fn test_help_succeeds() {
        let (status, out) = run(&["foo", "--help"]);
        assert_eq!(status, OcfStatus::Success);
        assert!(out.is_empty(), "help goes to the terminal, not the descriptor sink");
    }
}
