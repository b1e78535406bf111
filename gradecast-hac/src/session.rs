//! Session liveness checking.

use reqwest::Url;
use tracing::{debug, instrument};

use gradecast_core::SessionToken;
use gradecast_fetch::HttpClient;

use crate::classify::{classify, Disposition};
use crate::error::HacError;

/// Cookie name HAC sessions ride on.
pub const SESSION_COOKIE: &str = "ASP.NET_SessionId";

/// Lightweight authenticated page used as the liveness probe. Cheaper to
/// render than any grades page, and it rejects a dead session the same
/// way they all do.
const PROBE_PATH: &str = "HomeAccess/Home/WeekView.aspx";

/// Builds the Cookie header value for a session.
pub(crate) fn session_cookie(session: &SessionToken) -> String {
    format!("{SESSION_COOKIE}={}", session.expose())
}

/// Checks whether a session token still grants access to the portal.
///
/// Stateless: the portal is the source of truth for session liveness,
/// so every check is a fresh round trip. Safe to call repeatedly.
#[derive(Debug, Clone)]
pub struct SessionValidator {
    http: HttpClient,
    probe_url: Url,
}

impl SessionValidator {
    /// Creates a validator probing the given portal base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn new(http: HttpClient, base_url: &str) -> Result<Self, HacError> {
        let probe_url = HttpClient::join_url(base_url, PROBE_PATH)?;
        Ok(Self { http, probe_url })
    }

    /// Returns whether the session still grants access.
    ///
    /// Invalidity is a normal boolean outcome: any upstream response
    /// indicating unauthenticated access (login redirect, 401, 403)
    /// yields `Ok(false)`. Only transport-level problems and portal
    /// failures are errors.
    ///
    /// # Errors
    ///
    /// Returns `HacError::Transport` when the portal is unreachable or
    /// times out, and `HacError::Status` when it answers with a
    /// server-side failure.
    #[instrument(skip(self, session))]
    pub async fn validate(&self, session: &SessionToken) -> Result<bool, HacError> {
        debug!("Probing session liveness");

        let response = self
            .http
            .get_with_cookie(self.probe_url.clone(), &session_cookie(session))
            .await?;

        match classify(&response) {
            Disposition::Authorized => {
                debug!("Session is live");
                Ok(true)
            }
            Disposition::SessionExpired => {
                debug!("Session rejected by portal");
                Ok(false)
            }
            Disposition::PortalFailure(status) | Disposition::Unexpected(status) => {
                Err(HacError::Status(status))
            }
        }
    }
}
