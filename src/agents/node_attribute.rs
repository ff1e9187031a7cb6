//! `NodeAttribute`: keeps a node attribute set while the resource runs.
//!
//! Useful as a location-constraint anchor: other resources can be placed on
//! (or kept away from) nodes where this resource is active.

use crate::actions::{ActionSpec, ActionTable};
use crate::agent::{AgentCore, AgentInfo, ResourceAgent};
use crate::attributes::AttributeStore;
use crate::exit_codes::OcfStatus;
use crate::params::{Parameter, ParameterSet};

pub struct NodeAttribute {
    core: AgentCore,
    store: AttributeStore,
}

impl Default for NodeAttribute {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeAttribute {
    pub fn new() -> Self {
        Self::with_store(AttributeStore::default())
    }

    pub fn with_store(store: AttributeStore) -> Self {
        let mut params = ParameterSet::new();
        params
            .register(
                Parameter::new("name")
                    .unique(true)
                    .shortdesc("Attribute name")
                    .longdesc("Name of the node attribute to set while the resource is running."),
            )
            .register(
                Parameter::new("value")
                    .shortdesc("Attribute value")
                    .longdesc("Value written to the attribute on start.")
                    .default_value("1"),
            );

        let info = AgentInfo::new("NodeAttribute")
            .version(env!("CARGO_PKG_VERSION"))
            .shortdesc("Publishes a node attribute")
            .longdesc(
                "Sets a node attribute on start and removes it on stop. \
                 The resource counts as running while the attribute exists.",
            );

        let core = AgentCore::new(info, params).require_utilities([store.tool()]);

        Self { core, store }
    }

    fn attribute_name(&self) -> &str {
        self.core.params.get("name")
    }

    fn start(&mut self) -> OcfStatus {
        let name = self.attribute_name();
        let value = self.core.params.get("value");
        tracing::info!(attribute = name, value, "setting node attribute");
        self.store.set(&self.core.executor, name, value)
    }

    fn stop(&mut self) -> OcfStatus {
        let name = self.attribute_name();
        tracing::info!(attribute = name, "removing node attribute");
        self.store.remove(&self.core.executor, name)
    }

    fn monitor(&mut self) -> OcfStatus {
        if self.store.exists(&self.core.executor, self.attribute_name()) {
            OcfStatus::Success
        } else {
            OcfStatus::NotRunning
        }
    }
}

impl ResourceAgent for NodeAttribute {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AgentCore {
        &mut self.core
    }

    fn register_actions(actions: &mut ActionTable<Self>) {
        actions
            .register(ActionSpec::new("start", Self::start).timeout(10))
            .register(ActionSpec::new("stop", Self::stop).timeout(10))
            .register(ActionSpec::new("monitor", Self::monitor).timeout(10).interval(10));
    }

    fn validate_properties(&self) -> bool {
        if self.attribute_name().trim().is_empty() {
            tracing::error!("parameter 'name' must be set");
            return false;
        }
        true
    }
}
