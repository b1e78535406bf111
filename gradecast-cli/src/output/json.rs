//! JSON output formatting.

use anyhow::Result;

use gradecast_core::ReportOutcome;

/// JSON formatter for scripting consumers.
///
/// The payload is the serialized outcome itself, so scripts branch on
/// the same `status` tag request handlers do.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats an outcome as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format(&self, outcome: &ReportOutcome) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(outcome)?
        } else {
            serde_json::to_string(outcome)?
        };
        Ok(json)
    }
}
