//! Trait definitions for Gradecast.
//!
//! This module defines the seam between request handlers and a portal
//! client implementation.

use crate::models::{ReportOutcome, SessionToken};

/// A grade portal a report card can be fetched from.
///
/// Implementors are responsible for:
/// - Checking that the session still grants access
/// - Fetching and parsing the report-card resource
/// - Classifying every failure into the [`ReportOutcome`] taxonomy
///
/// Nothing may escape an implementation as an unhandled error: transport
/// and parse failures are converted into outcome variants before they
/// reach the caller.
pub trait GradePortal: Send + Sync {
    /// Checks whether the session still grants access to the portal.
    ///
    /// An invalid session is a normal boolean outcome, not an error; the
    /// error case is reserved for transport-level problems (portal
    /// unreachable, timed out).
    fn validate_session(
        &self,
        session: &SessionToken,
    ) -> impl std::future::Future<Output = Result<bool, crate::CoreError>> + Send;

    /// Fetches the report card for the session.
    ///
    /// Always returns an outcome, never an error: a blank or rejected
    /// session yields [`ReportOutcome::SessionInvalid`], everything else
    /// is classified into the remaining variants.
    fn get_report_card(
        &self,
        session: &SessionToken,
    ) -> impl std::future::Future<Output = ReportOutcome> + Send;
}
