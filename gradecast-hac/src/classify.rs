//! Pure decision table for portal responses.
//!
//! No network or parsing logic lives here. The fetch path feeds raw
//! status/redirect facts in and branches on the [`Disposition`] that
//! comes out, which keeps the HTTP-status nuances testable without a
//! server.

use reqwest::{header, Response, StatusCode};

/// Path fragment HAC redirects to when a session no longer grants
/// access. Districts mount HAC under different prefixes, but the account
/// controller path is stable across eSchoolPLUS deployments.
pub const LOGIN_PATH: &str = "/HomeAccess/Account/LogOn";

/// How a portal response should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// 2xx with the session accepted; the body is worth parsing.
    Authorized,
    /// The session no longer grants access. The user must sign in again.
    SessionExpired,
    /// The portal failed server-side (5xx).
    PortalFailure(StatusCode),
    /// A status with no defined meaning for this client (stray 3xx to a
    /// non-login page, 404 after a district reshuffles paths, ...).
    Unexpected(StatusCode),
}

/// Classifies a portal response from its status and redirect target.
///
/// Auth state takes priority over everything else: an auth-failure
/// status is `SessionExpired` even if the body alongside it looks
/// well-formed.
pub fn classify_response(status: StatusCode, location: Option<&str>) -> Disposition {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Disposition::SessionExpired;
    }

    if status.is_redirection() {
        // HAC signals an expired session by bouncing to the login page.
        if location.is_some_and(|l| l.contains(LOGIN_PATH)) {
            return Disposition::SessionExpired;
        }
        return Disposition::Unexpected(status);
    }

    if status.is_server_error() {
        return Disposition::PortalFailure(status);
    }

    if status.is_success() {
        return Disposition::Authorized;
    }

    Disposition::Unexpected(status)
}

/// Classifies a live response, reading its status and redirect target.
/// Every authenticated request in this crate is judged through here.
pub(crate) fn classify(response: &Response) -> Disposition {
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok());
    classify_response(response.status(), location)
}
