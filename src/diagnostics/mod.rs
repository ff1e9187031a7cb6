//! Best-effort reporting of unexpected command failures.
//!
//! The executor hands a [`FailureReport`] to whatever [`Reporter`] it was
//! given. Reporting never affects control flow: delivery errors are logged
//! by the caller and dropped.

mod dsn;
mod http;
mod report;

use crate::error::Result;

pub use dsn::Dsn;
pub use http::HttpReporter;
pub use report::{FailureReport, executable_name};

/// Sink for failure reports.
pub trait Reporter {
    fn report(&self, report: &FailureReport) -> Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, report: &FailureReport) -> Result<()> {
        (**self).report(report)
    }
}

/// Build the reporter for a configured endpoint.
///
/// An empty endpoint means reporting is disabled. An invalid endpoint is
/// logged and also disables reporting.
pub fn reporter_from_endpoint(endpoint: &str) -> Option<Box<dyn Reporter>> {
    if endpoint.trim().is_empty() {
        return None;
    }

    match HttpReporter::from_dsn(endpoint) {
        Ok(reporter) => {
            tracing::debug!(url = %reporter.dsn().store_url(), "diagnostics reporting enabled");
            Some(Box::new(reporter))
        }
        Err(e) => {
            tracing::warn!(error = %e, "sentryDSN is invalid");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_endpoint_disables_reporting() {
        assert!(reporter_from_endpoint("").is_none());
        assert!(reporter_from_endpoint("   ").is_none());
    }

    #[test]
    fn test_invalid_endpoint_disables_reporting() {
        assert!(reporter_from_endpoint("definitely not a dsn").is_none());
    }

    #[test]
    fn test_valid_endpoint_enables_reporting() {
        assert!(reporter_from_endpoint("https://key@sentry.example.com/1").is_some());
    }
}
