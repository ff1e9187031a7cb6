//! Identity and framework state shared by every agent.

use crate::config::DIAGNOSTICS_ENDPOINT_PARAM;
use crate::executor::CommandExecutor;
use crate::params::{Parameter, ParameterSet};

/// Default version advertised in metadata.
pub const DEFAULT_VERSION: &str = "0.1";

/// Default language of descriptions.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Descriptive identity of an agent type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInfo {
    /// Resource type name, e.g. `NodeAttribute`.
    pub name: String,
    pub version: String,
    /// Language tag attached to every description.
    pub language: String,
    pub shortdesc: String,
    pub longdesc: String,
}

impl AgentInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            shortdesc: String::new(),
            longdesc: String::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn shortdesc(mut self, text: impl Into<String>) -> Self {
        self.shortdesc = text.into();
        self
    }

    pub fn longdesc(mut self, text: impl Into<String>) -> Self {
        self.longdesc = text.into();
        self
    }
}

/// State every agent carries.
///
/// Only `params` is visible to the cluster manager. It always holds the
/// `sentryDSN` diagnostics endpoint next to the agent's own parameters; the
/// executor and required utilities are never overridable.
#[derive(Debug)]
pub struct AgentCore {
    pub info: AgentInfo,
    pub params: ParameterSet,
    /// Utilities that must be on `PATH` for any action but `meta-data`.
    pub required_utilities: Vec<String>,
    pub executor: CommandExecutor,
}

impl AgentCore {
    /// Wrap the agent's parameters, appending `sentryDSN` unless the agent
    /// registered its own.
    pub fn new(info: AgentInfo, mut params: ParameterSet) -> Self {
        if !params.contains(DIAGNOSTICS_ENDPOINT_PARAM) {
            params.register(diagnostics_parameter());
        }

        Self {
            info,
            params,
            required_utilities: Vec::new(),
            executor: CommandExecutor::new(),
        }
    }

    pub fn require_utilities<I, S>(mut self, utilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_utilities
            .extend(utilities.into_iter().map(Into::into));
        self
    }

    /// Sentry-style DSN for failure reports. Empty disables reporting.
    pub fn diagnostics_endpoint(&self) -> &str {
        self.params.get(DIAGNOSTICS_ENDPOINT_PARAM)
    }
}

fn diagnostics_parameter() -> Parameter {
    Parameter::new(DIAGNOSTICS_ENDPOINT_PARAM)
        .shortdesc("Error reporting endpoint")
        .longdesc("Sentry DSN that receives reports of unexpected command failures.")
        .optional()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_parameter_is_appended() {
        let mut params = ParameterSet::new();
        params.register(Parameter::new("bar"));
        let core = AgentCore::new(AgentInfo::new("Foo"), params);

        let names: Vec<_> = core.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["bar", DIAGNOSTICS_ENDPOINT_PARAM]);
        assert_eq!(core.diagnostics_endpoint(), "");
        assert!(!core.params.parameter(DIAGNOSTICS_ENDPOINT_PARAM).unwrap().required());
    }

    #[test]
    fn test_agent_registered_diagnostics_parameter_is_kept() {
        let mut params = ParameterSet::new();
        params.register(
            Parameter::new(DIAGNOSTICS_ENDPOINT_PARAM)
                .default_value("https://key@sentry.example.com/1"),
        );
        let core = AgentCore::new(AgentInfo::new("Foo"), params);

        assert_eq!(core.params.len(), 1);
        assert_eq!(core.diagnostics_endpoint(), "https://key@sentry.example.com/1");
    }
}
