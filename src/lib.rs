//! ocf-agent: base contract for OCF resource agents.
//!
//! A cluster resource manager runs an agent executable with one action name
//! and reads back the exit code. This crate supplies everything between the
//! command line and the agent's own `start`/`stop`/`monitor` logic:
//!
//! - **Config**: `OCF_RESKEY_*` environment overrides for registered parameters
//! - **Requirements**: presence probe for required external utilities
//! - **Dispatch**: action routing and the OCF exit code contract
//! - **Metadata**: the `meta-data` XML descriptor, built from registration tables
//! - **Executor**: subprocess execution with best-effort failure reporting
//! - **Attributes**: node attribute store access via `attrd_updater`

pub mod actions;
pub mod agent;
pub mod agents;
pub mod attributes;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod exit_codes;
pub mod metadata;
pub mod naming;
pub mod params;
pub mod requirements;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export public API
pub use actions::{ActionSpec, ActionTable, Handler, Origin};
pub use agent::{AgentCore, AgentInfo, ResourceAgent};
pub use dispatch::dispatch;
pub use error::{AgentError, Result};
pub use executor::CommandExecutor;
pub use exit_codes::OcfStatus;
pub use params::{Parameter, ParameterSet, ParameterType};
