//! Error types for resource agents.
//!
//! Uses thiserror for derive macros. None of these errors cross the
//! dispatcher boundary: they are caught where they occur, logged, and
//! either ignored or collapsed into an [`OcfStatus`].

use crate::exit_codes::OcfStatus;
use thiserror::Error;

/// Recoverable failures raised inside the agent framework.
#[derive(Error, Debug)]
pub enum AgentError {
    /// The diagnostics endpoint could not be parsed.
    #[error("invalid diagnostics DSN '{dsn}': {reason}")]
    InvalidDsn { dsn: String, reason: String },

    /// A failure report could not be delivered to the diagnostics endpoint.
    #[error("failed to deliver failure report: {0}")]
    ReportDelivery(String),

    /// A parameter value does not parse as its declared type.
    #[error("parameter '{name}' has invalid {expected} value '{value}'")]
    InvalidParameter {
        name: String,
        expected: &'static str,
        value: String,
    },

    /// A parameter was looked up that the agent never registered.
    #[error("parameter '{0}' is not registered")]
    UnknownParameter(String),

    /// A handler was registered for an action the framework reserves.
    #[error("action '{0}' is reserved and cannot be registered")]
    ReservedAction(String),
}

impl AgentError {
    /// Returns the OCF status an action should report for this error.
    pub fn status(&self) -> OcfStatus {
        match self {
            AgentError::InvalidDsn { .. } => OcfStatus::ErrConfigured,
            AgentError::ReportDelivery(_) => OcfStatus::ErrGeneric,
            AgentError::InvalidParameter { .. } => OcfStatus::ErrConfigured,
            AgentError::UnknownParameter(_) => OcfStatus::ErrGeneric,
            AgentError::ReservedAction(_) => OcfStatus::ErrGeneric,
        }
    }
}

/// Result type alias for agent framework operations.
pub type Result<T> = std::result::Result<T, AgentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_maps_to_configured() {
        let err = AgentError::InvalidParameter {
            name: "port".to_string(),
            expected: "integer",
            value: "abc".to_string(),
        };
        assert_eq!(err.status(), OcfStatus::ErrConfigured);
        assert_eq!(
            err.to_string(),
            "parameter 'port' has invalid integer value 'abc'"
        );
    }

    #[test]
    fn delivery_failure_maps_to_generic() {
        let err = AgentError::ReportDelivery("connection refused".to_string());
        assert_eq!(err.status(), OcfStatus::ErrGeneric);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = AgentError::InvalidDsn {
            dsn: "nonsense".to_string(),
            reason: "missing scheme".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid diagnostics DSN 'nonsense': missing scheme"
        );

        let err = AgentError::ReservedAction("meta-data".to_string());
        assert_eq!(
            err.to_string(),
            "action 'meta-data' is reserved and cannot be registered"
        );
    }
}
