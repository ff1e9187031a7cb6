//! Environment access.

use std::collections::HashMap;

/// Source of environment variables.
///
/// The process environment in production; a plain map in tests.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Identity of the resource instance being managed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceEnv {
    /// `OCF_RESOURCE_INSTANCE`, e.g. `my-flag` or `my-flag:0` for clones.
    pub resource_instance: Option<String>,
    /// `OCF_RESOURCE_TYPE`
    pub resource_type: Option<String>,
}

impl InstanceEnv {
    pub fn from_env(env: &impl EnvSource) -> Self {
        let non_empty = |key: &str| env.var(key).filter(|v| !v.is_empty());
        Self {
            resource_instance: non_empty("OCF_RESOURCE_INSTANCE"),
            resource_type: non_empty("OCF_RESOURCE_TYPE"),
        }
    }

    /// Instance name for log context; `-` when unknown.
    pub fn instance_label(&self) -> &str {
        self.resource_instance.as_deref().unwrap_or("-")
    }
}
