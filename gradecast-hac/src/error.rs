//! HAC-specific errors.

use reqwest::StatusCode;
use thiserror::Error;

/// HAC-specific errors.
///
/// Internal plumbing only: the [`crate::client::HacClient`] façade
/// converts every one of these into a `ReportOutcome` variant before
/// anything reaches a caller.
#[derive(Debug, Error)]
pub enum HacError {
    /// Transport-level failure (unreachable, timed out, TLS).
    #[error("Transport error: {0}")]
    Transport(#[from] gradecast_fetch::FetchError),

    /// The portal answered with a status outside the expected set.
    #[error("Unexpected portal status: {0}")]
    Status(StatusCode),

    /// The portal answered, but the body did not match the expected
    /// shape.
    #[error("Parse error: {0}")]
    Parse(String),
}
