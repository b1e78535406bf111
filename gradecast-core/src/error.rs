//! Core error types for Gradecast.

use thiserror::Error;

/// Core error type for Gradecast operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The portal could not be consulted. Carries the backend's own
    /// description; portal crates map their richer error types into this
    /// at the trait boundary.
    #[error("portal error: {0}")]
    Portal(String),
}
