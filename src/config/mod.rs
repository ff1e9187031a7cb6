//! Configuration loading for resource agents.
//!
//! Agents are configured entirely through the environment the cluster
//! manager sets up before invoking them:
//!
//! - `OCF_RESKEY_<name>` overrides the registered parameter `<name>`
//! - `OCF_RESKEY_sentryDSN` sets the diagnostics endpoint, a parameter every agent carries
//! - `OCF_RESOURCE_INSTANCE` / `OCF_RESOURCE_TYPE` identify the instance (logging only)

mod env;
mod loader;


// Re-export public API
pub use env::{EnvSource, InstanceEnv, ProcessEnv};
pub use loader::{
    DIAGNOSTICS_ENDPOINT_PARAM, ENV_PREFIX, env_var_name, load_agent, load_parameters,
};
