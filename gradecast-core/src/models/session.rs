//! The opaque session credential.

use std::fmt;
use zeroize::Zeroize;

/// An opaque session token issued by the portal's own login flow.
///
/// The token is a bearer credential: whoever holds it can read the
/// student's records until the portal expires it. No internal structure
/// is assumed or parsed. The value is redacted from `Debug` and `Display`
/// output and zeroized from memory on drop, so it never leaks through
/// logs or crash dumps.
///
/// The portal alone controls the token's lifetime; this client never
/// refreshes or renews it.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value for building the upstream request.
    ///
    /// Callers must not log or persist the returned value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the token is empty or all whitespace.
    ///
    /// A blank token can never authenticate, so callers short-circuit
    /// without an upstream round trip.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for SessionToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"<redacted>").finish()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<redacted>")
    }
}

impl Drop for SessionToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
