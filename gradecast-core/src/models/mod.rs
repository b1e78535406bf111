//! Domain models for Gradecast.
//!
//! Models are organized into submodules:
//! - [`session`] - The opaque session credential
//! - [`report`] - Report card, course, and assignment types
//! - [`outcome`] - The outcome taxonomy returned to callers

pub mod outcome;
pub mod report;
pub mod session;

pub use outcome::ReportOutcome;
pub use report::{Assignment, CourseGrade, Grade, GradingPeriod, ReportCard};
pub use session::SessionToken;
