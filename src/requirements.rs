//! Presence probe for required external utilities.
//!
//! Each utility is run bare, with no arguments. Only the shell's "command
//! not found" code (127) counts as missing; a utility that merely complains
//! about missing arguments is installed.

use crate::executor::{CommandExecutor, EXIT_NOT_FOUND};

/// Returns false as soon as one utility is missing.
pub fn check_all<S: AsRef<str>>(executor: &CommandExecutor, utilities: &[S]) -> bool {
    for utility in utilities {
        let utility = utility.as_ref();
        let exit_code = executor.run_expect_success(utility);
        tracing::debug!(utility, exit_code, "probed required utility");

        if exit_code == EXIT_NOT_FOUND {
            tracing::error!(utility, "required utility is not installed");
            return false;
        }
    }

    true
}
