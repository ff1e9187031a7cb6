//! node-attribute-agent: OCF resource agent publishing a node attribute.
//!
//! Thin entry point: argument parsing, logging, and dispatch live in
//! `ocf_agent::cli`; the process exits with the action's OCF status.

use ocf_agent::agents::NodeAttribute;
use std::process::ExitCode;

fn main() -> ExitCode {
    ocf_agent::cli::run_agent(NodeAttribute::new())
}
