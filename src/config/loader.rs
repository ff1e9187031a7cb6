//! Environment overrides for registered parameters.

use super::env::EnvSource;
use crate::agent::AgentCore;
use crate::params::ParameterSet;

/// Prefix of every parameter variable. The full name is `OCF_RESKEY_<name>`.
pub const ENV_PREFIX: &str = "OCF_RESKEY";

/// Framework parameter holding the diagnostics endpoint.
pub const DIAGNOSTICS_ENDPOINT_PARAM: &str = "sentryDSN";

/// Environment variable that overrides parameter `name`.
pub fn env_var_name(name: &str) -> String {
    format!("{}_{}", ENV_PREFIX, name)
}

/// Apply environment overrides to every registered parameter.
///
/// A variable that is unset or empty leaves the registered default in place.
/// Values are copied verbatim; declared types are not enforced here.
///
/// Returns the number of parameters overridden.
pub fn load_parameters(params: &mut ParameterSet, env: &impl EnvSource) -> usize {
    let mut overridden = 0;

    for param in params.iter_mut() {
        let var = env_var_name(&param.name);
        if let Some(value) = env.var(&var).filter(|v| !v.is_empty()) {
            tracing::debug!(parameter = %param.name, "overriding parameter from {}", var);
            param.value = value;
            overridden += 1;
        }
    }

    overridden
}

/// Load every parameter of an agent, the diagnostics endpoint included.
pub fn load_agent(core: &mut AgentCore, env: &impl EnvSource) -> usize {
    load_parameters(&mut core.params, env)
}
