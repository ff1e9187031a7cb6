//! Action dispatch.
//!
//! One invocation walks these stages exactly once:
//!
//! ```text
//! ConfigLoaded -> Validated | Rejected -> Dispatched -> Terminated
//! ```
//!
//! `meta-data` skips validation entirely. Everything resolves to an
//! [`OcfStatus`]; turning it into a process exit code is left to the caller.


use crate::actions::{ActionTable, META_DATA_HANDLER};
use crate::agent::ResourceAgent;
use crate::config::{EnvSource, InstanceEnv, load_agent};
use crate::diagnostics::reporter_from_endpoint;
use crate::exit_codes::OcfStatus;
use crate::metadata;
use crate::naming::to_handler_name;
use crate::requirements;
use std::fmt;
use std::io::Write;

/// Action name that prints the metadata descriptor.
pub const META_DATA_ACTION: &str = "meta-data";

/// Stage of a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ConfigLoaded,
    Validated,
    Rejected,
    Dispatched,
    Terminated,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ConfigLoaded => "config-loaded",
            Stage::Validated => "validated",
            Stage::Rejected => "rejected",
            Stage::Dispatched => "dispatched",
            Stage::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Run `action` against `agent`.
///
/// Configuration is loaded from `env`; the `meta-data` descriptor is written
/// to `out`. Returns the status the process should exit with.
pub fn dispatch<A, E, W>(agent: &mut A, action: &str, env: &E, out: &mut W) -> OcfStatus
where
    A: ResourceAgent,
    E: EnvSource,
    W: Write,
{
    let instance = InstanceEnv::from_env(env);
    let span = tracing::info_span!(
        "action",
        action,
        agent = %agent.core().info.name,
        instance = instance.instance_label()
    );
    let _enter = span.enter();

    let status = run_stages(agent, action, env, out);

    enter(Stage::Terminated);
    tracing::info!(%status, "action finished");
    status
}

fn run_stages<A, E, W>(agent: &mut A, action: &str, env: &E, out: &mut W) -> OcfStatus
where
    A: ResourceAgent,
    E: EnvSource,
    W: Write,
{
    load_config(agent, env);
    enter(Stage::ConfigLoaded);

    if action != META_DATA_ACTION {
        if let Err(status) = validate(agent) {
            enter(Stage::Rejected);
            return status;
        }
        enter(Stage::Validated);
    }

    enter(Stage::Dispatched);
    invoke(agent, action, out)
}

fn enter(stage: Stage) {
    tracing::trace!(%stage, "entering stage");
}

/// Load configuration and set up failure reporting.
fn load_config<A: ResourceAgent, E: EnvSource>(agent: &mut A, env: &E) {
    let core = agent.core_mut();
    let overridden = load_agent(core, env);
    tracing::debug!(overridden, "configuration loaded");

    if let Some(reporter) = reporter_from_endpoint(core.diagnostics_endpoint()) {
        core.executor.set_reporter(Some(reporter));
    }
}

/// Check required utilities, then the agent's own property validation.
fn validate<A: ResourceAgent>(agent: &A) -> Result<(), OcfStatus> {
    let core = agent.core();

    if !requirements::check_all(&core.executor, core.required_utilities.as_slice()) {
        return Err(OcfStatus::ErrInstalled);
    }

    if !agent.validate_properties() {
        tracing::error!("resource configuration is invalid");
        return Err(OcfStatus::ErrConfigured);
    }

    Ok(())
}

fn invoke<A: ResourceAgent, W: Write>(agent: &mut A, action: &str, out: &mut W) -> OcfStatus {
    let handler_name = to_handler_name(action);

    if handler_name == META_DATA_HANDLER {
        return emit_metadata(agent, out);
    }

    let actions = ActionTable::<A>::for_agent();
    match actions.lookup(&handler_name) {
        Some(spec) => {
            tracing::debug!(handler = %handler_name, "invoking handler");
            spec.invoke(agent)
        }
        None => {
            tracing::warn!(handler = %handler_name, "action is not implemented");
            OcfStatus::ErrUnimplemented
        }
    }
}

/// Write the descriptor. Succeeds unless the output cannot be written.
fn emit_metadata<A: ResourceAgent, W: Write>(agent: &A, out: &mut W) -> OcfStatus {
    let document = metadata::generate(agent);

    match out
        .write_all(document.as_bytes())
        .and_then(|()| out.flush())
    {
        Ok(()) => OcfStatus::Success,
        Err(e) => {
            tracing::error!(error = %e, "failed to write metadata");
            OcfStatus::ErrGeneric
        }
    }
}
