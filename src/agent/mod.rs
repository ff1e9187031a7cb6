//! The resource agent contract.
//!
//! A concrete agent is a type that owns an [`AgentCore`] and implements
//! [`ResourceAgent`]. Everything the framework needs to know about it
//! (parameters, actions, descriptions) is registered explicitly:
//!
//! - parameters go into the [`ParameterSet`](crate::params::ParameterSet) passed to [`AgentCore::new`]
//! - actions are registered in [`ResourceAgent::register_actions`]
//! - extra configuration checks go in [`ResourceAgent::validate_properties`]
//!
//! ```
//! use ocf_agent::{ActionSpec, ActionTable, AgentCore, AgentInfo, OcfStatus, Parameter,
//!     ParameterSet, ResourceAgent};
//!
//! struct Echo {
//!     core: AgentCore,
//! }
//!
//! impl Echo {
//!     fn new() -> Self {
//!         let mut params = ParameterSet::new();
//!         params.register(Parameter::new("message").shortdesc("What to say"));
//!         Self { core: AgentCore::new(AgentInfo::new("Echo"), params) }
//!     }
//!
//!     fn start(&mut self) -> OcfStatus {
//!         println!("{}", self.core.params.get("message"));
//!         OcfStatus::Success
//!     }
//! }
//!
//! impl ResourceAgent for Echo {
//!     fn core(&self) -> &AgentCore { &self.core }
//!     fn core_mut(&mut self) -> &mut AgentCore { &mut self.core }
//!
//!     fn register_actions(actions: &mut ActionTable<Self>) {
//!         actions.register(ActionSpec::new("start", Self::start).timeout(10));
//!     }
//! }
//! ```

mod state;

pub use state::{AgentCore, AgentInfo, DEFAULT_LANGUAGE, DEFAULT_VERSION};

use crate::actions::ActionTable;

/// A resource agent type.
pub trait ResourceAgent: Sized {
    fn core(&self) -> &AgentCore;

    fn core_mut(&mut self) -> &mut AgentCore;

    /// Register or override actions. Defaults are already in `actions`.
    fn register_actions(_actions: &mut ActionTable<Self>) {}

    /// Extra configuration checks run before every action but `meta-data`.
    fn validate_properties(&self) -> bool {
        true
    }
}
