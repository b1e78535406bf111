//! The outcome taxonomy returned to callers.

use serde::{Deserialize, Serialize};

use super::report::ReportCard;

/// The tagged result of one report-card request.
///
/// This is the only value that crosses the boundary back to callers.
/// Exactly one variant is produced per call, and callers branch on it:
/// [`SessionInvalid`](Self::SessionInvalid) means the end user must sign
/// in again, while the two failure variants map to a generic "try again"
/// for users with the detail kept for operator diagnostics.
///
/// Serialized with a `status` tag so the same value doubles as the JSON
/// boundary shape:
///
/// ```json
/// {"status":"session_invalid"}
/// {"status":"upstream_error","detail":"request timed out"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// The fetch succeeded and parsed cleanly.
    Success {
        /// The parsed report card.
        report: ReportCard,
    },
    /// The session no longer grants access; the user must sign in again.
    SessionInvalid,
    /// The portal was unreachable, timed out, or answered with a
    /// server-side failure.
    UpstreamError {
        /// Short diagnostic message for operators.
        detail: String,
    },
    /// The portal answered, but the body did not match the expected
    /// course/grade shape.
    ParseError {
        /// Short diagnostic message for operators.
        detail: String,
    },
}

impl ReportOutcome {
    /// Convenience constructor for a successful outcome.
    pub fn success(report: ReportCard) -> Self {
        Self::Success { report }
    }

    /// Convenience constructor for an upstream failure.
    pub fn upstream(detail: impl Into<String>) -> Self {
        Self::UpstreamError {
            detail: detail.into(),
        }
    }

    /// Convenience constructor for a parse failure.
    pub fn parse_failure(detail: impl Into<String>) -> Self {
        Self::ParseError {
            detail: detail.into(),
        }
    }

    /// Returns true for [`Success`](Self::Success).
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns true when the caller should re-authenticate.
    pub fn needs_reauth(&self) -> bool {
        matches!(self, Self::SessionInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::GradingPeriod;

    #[test]
    fn test_session_invalid_json_shape() {
        let json = serde_json::to_string(&ReportOutcome::SessionInvalid).unwrap();
        assert_eq!(json, r#"{"status":"session_invalid"}"#);
    }

    #[test]
    fn test_upstream_error_carries_detail() {
        let outcome = ReportOutcome::upstream("request timed out");
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains(r#""status":"upstream_error""#));
        assert!(json.contains("request timed out"));
    }

    #[test]
    fn test_success_round_trip() {
        let outcome = ReportOutcome::success(ReportCard::new(GradingPeriod::from_label("MP1")));
        let json = serde_json::to_string(&outcome).unwrap();
        let back: ReportOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
        assert!(back.is_success());
    }

    #[test]
    fn test_needs_reauth() {
        assert!(ReportOutcome::SessionInvalid.needs_reauth());
        assert!(!ReportOutcome::upstream("boom").needs_reauth());
    }
}
