use crate::actions::{ActionSpec, ActionTable};
use crate::agent::{AgentCore, AgentInfo, ResourceAgent};
use crate::diagnostics::{FailureReport, Reporter};
use crate::error::{AgentError, Result};
use crate::exit_codes::OcfStatus;
use crate::params::{Parameter, ParameterSet, ParameterType};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Sets an environment variable for the lifetime of the guard.
///
/// The environment is process-global; tests using this must be `#[serial]`.
pub(crate) struct EnvGuard {
    key: String,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &str, value: &str) -> Self {
        let original = std::env::var(key).ok();
        // SAFETY: callers are #[serial], so no other test thread touches the environment.
        unsafe { std::env::set_var(key, value) };
        Self {
            key: key.to_string(),
            original,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see EnvGuard::set.
        unsafe {
            match &self.original {
                Some(value) => std::env::set_var(&self.key, value),
                None => std::env::remove_var(&self.key),
            }
        }
    }
}

pub(crate) fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(crate) type Reports = Rc<RefCell<Vec<FailureReport>>>;

/// Reporter that keeps every report in memory.
pub(crate) struct RecordingReporter {
    reports: Reports,
}

impl RecordingReporter {
    pub(crate) fn new() -> (Self, Reports) {
        let reports = Reports::default();
        (
            Self {
                reports: Rc::clone(&reports),
            },
            reports,
        )
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, report: &FailureReport) -> Result<()> {
        self.reports.borrow_mut().push(report.clone());
        Ok(())
    }
}

/// Reporter whose delivery always fails.
pub(crate) struct FailingReporter;

impl Reporter for FailingReporter {
    fn report(&self, _report: &FailureReport) -> Result<()> {
        Err(AgentError::ReportDelivery("endpoint unreachable".to_string()))
    }
}

/// Agent with a single `bar` parameter and no overridden actions.
pub(crate) struct Foo {
    core: AgentCore,
}

impl Foo {
    pub(crate) fn new() -> Self {
        let mut params = ParameterSet::new();
        params.register(Parameter::new("bar"));
        Self {
            core: AgentCore::new(AgentInfo::new("Foo"), params),
        }
    }

    pub(crate) fn with_bar_default(value: &str) -> Self {
        let mut foo = Self::new();
        foo.core.params.register(Parameter::new("bar").default_value(value));
        foo
    }
}

impl ResourceAgent for Foo {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AgentCore {
        &mut self.core
    }
}

/// Agent that overrides lifecycle actions and records what ran.
pub(crate) struct Probe {
    core: AgentCore,
    pub(crate) calls: Vec<&'static str>,
}

impl Probe {
    pub(crate) fn new() -> Self {
        let mut params = ParameterSet::new();
        params
            .register(
                Parameter::new("mode")
                    .shortdesc("Operating mode")
                    .longdesc("Either 'ok' or 'broken'.")
                    .default_value("ok"),
            )
            .register(
                Parameter::new("count")
                    .kind(ParameterType::Integer)
                    .unique(true),
            );

        let info = AgentInfo::new("Probe")
            .version("1.2")
            .shortdesc("Test probe")
            .longdesc("Records lifecycle calls.");

        Self {
            core: AgentCore::new(info, params),
            calls: Vec::new(),
        }
    }

    pub(crate) fn requiring(mut self, utilities: &[&str]) -> Self {
        self.core.required_utilities = utilities.iter().map(|u| u.to_string()).collect();
        self
    }

    fn start(&mut self) -> OcfStatus {
        self.calls.push("start");
        OcfStatus::Success
    }

    fn monitor(&mut self) -> OcfStatus {
        self.calls.push("monitor");
        OcfStatus::NotRunning
    }

    fn reload_config(&mut self) -> OcfStatus {
        self.calls.push("reload-config");
        OcfStatus::ErrPerm
    }
}

impl ResourceAgent for Probe {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AgentCore {
        &mut self.core
    }

    fn register_actions(actions: &mut ActionTable<Self>) {
        actions
            .register(ActionSpec::new("start", Self::start).timeout(30))
            .register(ActionSpec::new("monitor", Self::monitor).timeout(20).interval(15))
            .register(ActionSpec::new("reload-config", Self::reload_config));
    }

    fn validate_properties(&self) -> bool {
        self.core.params.get("mode") != "broken"
    }
}
