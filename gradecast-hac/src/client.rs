//! The HAC client façade.

use reqwest::Url;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use gradecast_core::{CoreError, GradePortal, ReportCard, ReportOutcome, SessionToken};
use gradecast_fetch::HttpClient;

use crate::classify::{classify, Disposition};
use crate::error::HacError;
use crate::parser;
use crate::session::{session_cookie, SessionValidator};

// ============================================================================
// Constants
// ============================================================================

/// Report-card resource, scoped to the session's student.
const REPORT_CARD_PATH: &str = "HomeAccess/Content/Student/ReportCards.aspx";

/// Classwork resource with per-assignment breakdowns.
const CLASSWORK_PATH: &str = "HomeAccess/Content/Student/Assignments.aspx";

// ============================================================================
// Client
// ============================================================================

/// The only entry point request handlers call.
///
/// Sequences validator → fetcher → classifier and always returns a
/// [`ReportOutcome`]; transport and parse failures are converted at this
/// boundary, never propagated.
///
/// The validate-then-fetch gate costs one extra round trip per call and
/// buys an unambiguous signal: a session already known dead never
/// triggers the heavier grades scrape. Sessions can still expire between
/// the two requests, so the fetch path classifies auth rejections too.
///
/// Stateless and cheap to clone; concurrent calls are independent, and
/// nothing about a session is retained between calls (the portal is the
/// source of truth for liveness).
#[derive(Debug, Clone)]
pub struct HacClient {
    http: HttpClient,
    validator: SessionValidator,
    report_url: Url,
    classwork_url: Url,
}

impl HacClient {
    /// Creates a client for the portal at `base_url` with the default
    /// request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is unparseable or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, HacError> {
        Self::with_http(HttpClient::new()?, base_url)
    }

    /// Creates a client with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is unparseable or the HTTP
    /// client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, HacError> {
        Self::with_http(HttpClient::with_timeout(timeout)?, base_url)
    }

    /// Creates a client over an existing transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is unparseable.
    pub fn with_http(http: HttpClient, base_url: &str) -> Result<Self, HacError> {
        Ok(Self {
            validator: SessionValidator::new(http.clone(), base_url)?,
            report_url: HttpClient::join_url(base_url, REPORT_CARD_PATH)?,
            classwork_url: HttpClient::join_url(base_url, CLASSWORK_PATH)?,
            http,
        })
    }

    /// Fetches the report card for a session.
    ///
    /// A blank token short-circuits to `SessionInvalid` with no upstream
    /// call; a token the validator rejects returns `SessionInvalid`
    /// without the grades fetch.
    #[instrument(skip(self, session))]
    pub async fn get_report_card(&self, session: &SessionToken) -> ReportOutcome {
        self.fetch_gated(session, &self.report_url, parser::parse_report_card)
            .await
    }

    /// Fetches the classwork breakdown for a session, same gating and
    /// taxonomy as the report card.
    #[instrument(skip(self, session))]
    pub async fn get_classwork(&self, session: &SessionToken) -> ReportOutcome {
        self.fetch_gated(session, &self.classwork_url, parser::parse_classwork)
            .await
    }

    /// Validate-then-fetch sequence shared by both resources.
    async fn fetch_gated(
        &self,
        session: &SessionToken,
        url: &Url,
        parse: fn(&str) -> Result<ReportCard, HacError>,
    ) -> ReportOutcome {
        if session.is_blank() {
            debug!("Blank session token, skipping upstream calls");
            return ReportOutcome::SessionInvalid;
        }

        match self.validator.validate(session).await {
            Ok(true) => {}
            Ok(false) => {
                debug!("Validator rejected session, skipping fetch");
                return ReportOutcome::SessionInvalid;
            }
            Err(err) => return outcome_from_error(&err),
        }

        self.fetch_page(session, url, parse).await
    }

    /// Single authenticated GET of one resource, classified into the
    /// caller-facing taxonomy.
    async fn fetch_page(
        &self,
        session: &SessionToken,
        url: &Url,
        parse: fn(&str) -> Result<ReportCard, HacError>,
    ) -> ReportOutcome {
        let response = match self
            .http
            .get_with_cookie(url.clone(), &session_cookie(session))
            .await
        {
            Ok(response) => response,
            Err(err) => return outcome_from_error(&HacError::Transport(err)),
        };

        match classify(&response) {
            Disposition::Authorized => {
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(err) => {
                        return outcome_from_error(&HacError::Transport(
                            gradecast_fetch::FetchError::Body(err.to_string()),
                        ))
                    }
                };
                match parse(&body) {
                    Ok(report) => {
                        info!(courses = report.courses.len(), "Fetched report");
                        ReportOutcome::success(report)
                    }
                    Err(err) => outcome_from_error(&err),
                }
            }
            // The session was valid moments ago at validate time; it can
            // still expire before the fetch lands.
            Disposition::SessionExpired => {
                debug!(status = %response.status(), "Session expired between validate and fetch");
                ReportOutcome::SessionInvalid
            }
            Disposition::PortalFailure(s) | Disposition::Unexpected(s) => {
                outcome_from_error(&HacError::Status(s))
            }
        }
    }
}

/// Maps an internal error onto the caller-facing taxonomy.
fn outcome_from_error(err: &HacError) -> ReportOutcome {
    match err {
        HacError::Status(status) => {
            warn!(status = %status, "Portal answered with unexpected status");
            ReportOutcome::upstream(format!("portal answered {status}"))
        }
        HacError::Transport(detail) => {
            warn!(error = %detail, "Transport failure reaching portal");
            ReportOutcome::upstream(detail.to_string())
        }
        HacError::Parse(detail) => {
            warn!(detail = %detail, "Portal markup did not match expected shape");
            ReportOutcome::parse_failure(detail.clone())
        }
    }
}

impl GradePortal for HacClient {
    async fn validate_session(&self, session: &SessionToken) -> Result<bool, CoreError> {
        if session.is_blank() {
            return Ok(false);
        }
        self.validator
            .validate(session)
            .await
            .map_err(|e| CoreError::Portal(e.to_string()))
    }

    async fn get_report_card(&self, session: &SessionToken) -> ReportOutcome {
        HacClient::get_report_card(self, session).await
    }
}
