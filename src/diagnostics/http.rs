//! Delivery of failure reports to a Sentry-compatible endpoint.

use super::dsn::Dsn;
use super::report::FailureReport;
use super::Reporter;
use crate::error::{AgentError, Result};
use serde_json::{Value, json};
use std::time::Duration;

const CLIENT_NAME: &str = concat!("ocf-agent/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Reporter that posts events over HTTP.
#[derive(Debug, Clone)]
pub struct HttpReporter {
    dsn: Dsn,
    timeout: Duration,
}

impl HttpReporter {
    pub fn new(dsn: Dsn) -> Self {
        Self {
            dsn,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Build a reporter from a raw DSN string.
    pub fn from_dsn(raw: &str) -> Result<Self> {
        Dsn::parse(raw).map(Self::new)
    }

    pub fn dsn(&self) -> &Dsn {
        &self.dsn
    }
}

/// Event body for a failure report.
pub(crate) fn event_payload(report: &FailureReport) -> Value {
    json!({
        "message": report.message,
        "level": "error",
        "logger": "ocf-agent",
        "platform": "other",
        "timestamp": report.timestamp.to_rfc3339(),
        "server_name": report.server_name,
        "tags": {
            "executable": report.executable,
        },
        "extra": report,
    })
}

impl Reporter for HttpReporter {
    fn report(&self, report: &FailureReport) -> Result<()> {
        let url = self.dsn.store_url();
        let auth = self
            .dsn
            .auth_header(CLIENT_NAME, report.timestamp.timestamp());

        ureq::post(&url)
            .timeout(self.timeout)
            .set("X-Sentry-Auth", &auth)
            .send_json(event_payload(report))
            .map_err(|e| AgentError::ReportDelivery(format!("POST {}: {}", url, e)))?;

        Ok(())
    }
}
