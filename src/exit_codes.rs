//! Exit code taxonomy for OCF resource agents.
//!
//! Every action resolves to exactly one of these codes:
//! - 0: Success
//! - 1: Generic error
//! - 2: Bad arguments
//! - 3: Action not implemented
//! - 4: Insufficient permissions
//! - 5: Required component not installed
//! - 6: Resource misconfigured
//! - 7: Resource not running

use std::fmt;
use std::process::ExitCode;

/// No error.
pub const SUCCESS: i32 = 0;

/// Generic error.
pub const ERR_GENERIC: i32 = 1;

/// Wrong command-line arguments.
pub const ERR_ARGS: i32 = 2;

/// Requested action is not implemented by the agent.
pub const ERR_UNIMPLEMENTED: i32 = 3;

/// Permission error.
pub const ERR_PERM: i32 = 4;

/// A required component is not installed.
pub const ERR_INSTALLED: i32 = 5;

/// Wrong resource configuration.
pub const ERR_CONFIGURED: i32 = 6;

/// Resource is not running. Usually returned by `monitor`.
pub const NOT_RUNNING: i32 = 7;

/// Result of a resource agent action.
///
/// The set is closed: handlers cannot produce any other code, so the
/// dispatcher can pass a handler's status through to the process unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OcfStatus {
    Success,
    ErrGeneric,
    ErrArgs,
    ErrUnimplemented,
    ErrPerm,
    ErrInstalled,
    ErrConfigured,
    NotRunning,
}

impl OcfStatus {
    /// Integer exit code for this status.
    pub fn code(self) -> i32 {
        match self {
            OcfStatus::Success => SUCCESS,
            OcfStatus::ErrGeneric => ERR_GENERIC,
            OcfStatus::ErrArgs => ERR_ARGS,
            OcfStatus::ErrUnimplemented => ERR_UNIMPLEMENTED,
            OcfStatus::ErrPerm => ERR_PERM,
            OcfStatus::ErrInstalled => ERR_INSTALLED,
            OcfStatus::ErrConfigured => ERR_CONFIGURED,
            OcfStatus::NotRunning => NOT_RUNNING,
        }
    }

    /// Map a raw integer back into the taxonomy, if it belongs to it.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            SUCCESS => Some(OcfStatus::Success),
            ERR_GENERIC => Some(OcfStatus::ErrGeneric),
            ERR_ARGS => Some(OcfStatus::ErrArgs),
            ERR_UNIMPLEMENTED => Some(OcfStatus::ErrUnimplemented),
            ERR_PERM => Some(OcfStatus::ErrPerm),
            ERR_INSTALLED => Some(OcfStatus::ErrInstalled),
            ERR_CONFIGURED => Some(OcfStatus::ErrConfigured),
            NOT_RUNNING => Some(OcfStatus::NotRunning),
            _ => None,
        }
    }

    /// Collapse a subprocess exit code into success or generic error.
    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            OcfStatus::Success
        } else {
            OcfStatus::ErrGeneric
        }
    }
}

impl fmt::Display for OcfStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OcfStatus::Success => "OCF_SUCCESS",
            OcfStatus::ErrGeneric => "OCF_ERR_GENERIC",
            OcfStatus::ErrArgs => "OCF_ERR_ARGS",
            OcfStatus::ErrUnimplemented => "OCF_ERR_UNIMPLEMENTED",
            OcfStatus::ErrPerm => "OCF_ERR_PERM",
            OcfStatus::ErrInstalled => "OCF_ERR_INSTALLED",
            OcfStatus::ErrConfigured => "OCF_ERR_CONFIGURED",
            OcfStatus::NotRunning => "OCF_NOT_RUNNING",
        };
        write!(f, "{} ({})", name, self.code())
    }
}

impl From<OcfStatus> for ExitCode {
    fn from(status: OcfStatus) -> Self {
        ExitCode::from(status.code() as u8)
    }
}
