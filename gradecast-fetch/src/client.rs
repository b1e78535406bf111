//! HTTP client with tracing, bounded timeouts, and cookie auth.

use reqwest::{header, redirect::Policy, Client, Response};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::error::FetchError;

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// User agent string for Gradecast.
const USER_AGENT: &str = concat!("Gradecast/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper with tracing, bounded timeouts, and cookie auth.
///
/// Redirects are never followed: an expired HAC session answers with a
/// redirect to the login page, and that redirect is a signal the caller
/// must see, not chase.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the underlying client cannot be
    /// built, which indicates a broken TLS configuration.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the underlying client cannot be
    /// built.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(Policy::none())
            .build()
            .map_err(FetchError::Http)?;

        Ok(Self { inner: client })
    }

    /// Joins a path onto a base URL.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the base cannot be parsed or
    /// the path cannot be joined onto it.
    pub fn join_url(base: &str, path: &str) -> Result<Url, FetchError> {
        let base = Url::parse(base).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        base.join(path)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }

    /// Performs a GET request carrying a session cookie.
    ///
    /// The cookie value is marked sensitive so it is excluded from any
    /// header dumps `reqwest` or middleware might produce.
    #[instrument(skip(self, cookie), fields(url = %url))]
    pub async fn get_with_cookie(
        &self,
        url: Url,
        cookie: &str,
    ) -> Result<Response, FetchError> {
        debug!("GET request with session cookie");

        let mut value = header::HeaderValue::from_str(cookie)
            .map_err(|e| FetchError::Header(e.to_string()))?;
        value.set_sensitive(true);

        let response = self
            .inner
            .get(url)
            .header(header::COOKIE, value)
            .send()
            .await?;
        debug!(status = %response.status(), "Response received");
        Ok(response)
    }
}

// ============================================================================
// Tests
// ============================================================================
