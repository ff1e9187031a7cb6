//! Action registration.
//!
//! Every agent gets the base-contract actions (`start`, `stop`, `monitor`,
//! `validate-all`) for free. A concrete agent overrides them, or adds its
//! own, by registering handlers in [`ResourceAgent::register_actions`].
//! Handlers are keyed by handler identifier (`actionValidateAll`), which is
//! also what the dispatcher derives from the action name on the command line.
//!
//! [`ResourceAgent::register_actions`]: crate::agent::ResourceAgent::register_actions

use crate::agent::ResourceAgent;
use crate::error::{AgentError, Result};
use crate::exit_codes::OcfStatus;
use crate::naming::{to_action_name, to_handler_name};

/// Handler identifier of the metadata action. Never registrable.
pub const META_DATA_HANDLER: &str = "actionMetaData";

/// Handler identifier of the validation action. Always advertised.
pub const VALIDATE_ALL_HANDLER: &str = "actionValidateAll";

/// An action handler.
pub type Handler<A> = fn(&mut A) -> OcfStatus;

/// Where a registered action came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Default supplied by the base contract.
    Base,
    /// Registered by the concrete agent.
    Agent,
}

/// A registered action handler and its advisory scheduling metadata.
pub struct ActionSpec<A> {
    handler_name: String,
    timeout: Option<u32>,
    interval: Option<u32>,
    handler: Handler<A>,
    origin: Origin,
}

impl<A> ActionSpec<A> {
    /// Create an action from its command-line name, e.g. `validate-all`.
    pub fn new(action_name: &str, handler: Handler<A>) -> Self {
        Self {
            handler_name: to_handler_name(action_name),
            timeout: None,
            interval: None,
            handler,
            origin: Origin::Agent,
        }
    }

    /// Advisory timeout in seconds.
    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Advisory repeat interval in seconds.
    pub fn interval(mut self, seconds: u32) -> Self {
        self.interval = Some(seconds);
        self
    }

    fn base(mut self) -> Self {
        self.origin = Origin::Base;
        self
    }

    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    /// Command-line name of this action.
    pub fn name(&self) -> String {
        to_action_name(&self.handler_name)
    }

    pub fn timeout_secs(&self) -> Option<u32> {
        self.timeout
    }

    pub fn interval_secs(&self) -> Option<u32> {
        self.interval
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn invoke(&self, agent: &mut A) -> OcfStatus {
        (self.handler)(agent)
    }

    /// Whether this action belongs in the metadata descriptor.
    ///
    /// Base defaults are hidden unless overridden; `validate-all` is always shown.
    pub fn is_advertised(&self) -> bool {
        self.origin == Origin::Agent || self.handler_name == VALIDATE_ALL_HANDLER
    }
}

/// The dispatch table of an agent, in registration order.
pub struct ActionTable<A> {
    actions: Vec<ActionSpec<A>>,
}

impl<A: ResourceAgent> ActionTable<A> {
    /// Base defaults plus everything `A` registers.
    pub fn for_agent() -> Self {
        let mut table = Self::with_defaults();
        A::register_actions(&mut table);
        table
    }
}

impl<A> ActionTable<A> {
    /// Table holding only the base-contract defaults.
    pub fn with_defaults() -> Self {
        Self {
            actions: vec![
                ActionSpec::new("start", unimplemented_action::<A>)
                    .timeout(10)
                    .base(),
                ActionSpec::new("stop", unimplemented_action::<A>)
                    .timeout(10)
                    .base(),
                ActionSpec::new("monitor", unimplemented_action::<A>)
                    .timeout(10)
                    .interval(10)
                    .base(),
                ActionSpec::new("validate-all", validate_all_default::<A>)
                    .timeout(5)
                    .base(),
            ],
        }
    }

    /// Register an action, replacing any existing action of the same name.
    ///
    /// `meta-data` is reserved; attempting to register it is logged and ignored.
    pub fn register(&mut self, spec: ActionSpec<A>) -> &mut Self {
        if let Err(e) = self.try_register(spec) {
            tracing::warn!(error = %e, "ignoring action registration");
        }
        self
    }

    /// Register an action, failing for reserved names.
    pub fn try_register(&mut self, spec: ActionSpec<A>) -> Result<()> {
        if spec.handler_name == META_DATA_HANDLER {
            return Err(AgentError::ReservedAction(spec.name()));
        }

        match self
            .actions
            .iter_mut()
            .find(|a| a.handler_name == spec.handler_name)
        {
            Some(existing) => *existing = spec,
            None => self.actions.push(spec),
        }
        Ok(())
    }

    /// Find the handler for a handler identifier.
    pub fn lookup(&self, handler_name: &str) -> Option<&ActionSpec<A>> {
        self.actions.iter().find(|a| a.handler_name == handler_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionSpec<A>> {
        self.actions.iter()
    }

    /// Actions that appear in the metadata descriptor.
    pub fn advertised(&self) -> impl Iterator<Item = &ActionSpec<A>> {
        self.actions.iter().filter(|a| a.is_advertised())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

fn unimplemented_action<A>(_agent: &mut A) -> OcfStatus {
    OcfStatus::ErrUnimplemented
}

// Validation already ran before dispatch; reaching this handler means it passed.
fn validate_all_default<A>(_agent: &mut A) -> OcfStatus {
    OcfStatus::Success
}
