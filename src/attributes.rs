//! Node attribute store access through `attrd_updater`.
//!
//! Attribute names and values are shell-quoted before they reach the
//! executor, so arbitrary strings are safe to pass.

use crate::executor::CommandExecutor;
use crate::exit_codes::OcfStatus;

/// Default attribute tool.
pub const ATTRD_UPDATER: &str = "attrd_updater";

/// Handle to the node attribute store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeStore {
    /// Command prefix used to invoke the tool, e.g. `attrd_updater`.
    tool: String,
}

impl Default for AttributeStore {
    fn default() -> Self {
        Self::new(ATTRD_UPDATER)
    }
}

impl AttributeStore {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn set_command(&self, name: &str, value: &str) -> String {
        format!(
            "{} -n {} -v {}",
            self.tool,
            shell_words::quote(name),
            shell_words::quote(value)
        )
    }

    pub fn remove_command(&self, name: &str) -> String {
        format!("{} -D -n {}", self.tool, shell_words::quote(name))
    }

    pub fn query_command(&self, name: &str) -> String {
        format!("{} -Q -n {}", self.tool, shell_words::quote(name))
    }

    /// Set attribute `name` to `value` on the local node.
    pub fn set(&self, executor: &CommandExecutor, name: &str, value: &str) -> OcfStatus {
        let exit_code = executor.run_expect_success(&self.set_command(name, value));
        OcfStatus::from_exit_code(exit_code)
    }

    /// Remove attribute `name` from the local node.
    pub fn remove(&self, executor: &CommandExecutor, name: &str) -> OcfStatus {
        let exit_code = executor.run_expect_success(&self.remove_command(name));
        OcfStatus::from_exit_code(exit_code)
    }

    /// Whether attribute `name` is currently set.
    ///
    /// A missing attribute is a normal answer, so failures are not reported.
    pub fn exists(&self, executor: &CommandExecutor, name: &str) -> bool {
        executor.run_unchecked(&self.query_command(name)) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingReporter;

    #[test]
    fn test_commands_are_quoted() {
        let store = AttributeStore::default();
        assert_eq!(store.set_command("flag", "1"), "attrd_updater -n flag -v 1");
        assert_eq!(
            store.set_command("my flag", "it's; rm -rf /"),
            "attrd_updater -n 'my flag' -v 'it'\\''s; rm -rf /'"
        );
        assert_eq!(store.remove_command("flag"), "attrd_updater -D -n flag");
        assert_eq!(store.query_command("flag"), "attrd_updater -Q -n flag");
    }

    #[test]
    fn test_exit_status_collapses() {
        let executor = CommandExecutor::new();
        assert_eq!(AttributeStore::new("true").set(&executor, "a", "b"), OcfStatus::Success);
        assert_eq!(AttributeStore::new("false").set(&executor, "a", "b"), OcfStatus::ErrGeneric);
        assert_eq!(AttributeStore::new("true").remove(&executor, "a"), OcfStatus::Success);
        assert_eq!(AttributeStore::new("sh -c 'exit 105'").remove(&executor, "a"), OcfStatus::ErrGeneric);
    }

    #[test]
    fn test_failures_are_reported_but_queries_are_not() {
        let (reporter, reports) = RecordingReporter::new();
        let executor = CommandExecutor::with_reporter(Box::new(reporter));
        let store = AttributeStore::new("false");

        assert!(!store.exists(&executor, "flag"));
        assert!(reports.borrow().is_empty());

        store.set(&executor, "flag", "1");
        assert_eq!(reports.borrow().len(), 1);
        assert_eq!(reports.borrow()[0].command, "false -n flag -v 1");
    }

    #[test]
    fn test_missing_tool_is_generic_error() {
        let executor = CommandExecutor::new();
        let store = AttributeStore::new("ocf-agent-test-no-attrd");
        assert_eq!(store.set(&executor, "a", "b"), OcfStatus::ErrGeneric);
        assert!(!store.exists(&executor, "a"));
    }
}
