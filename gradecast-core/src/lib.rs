// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Gradecast Core
//!
//! Core types, models, and traits for the Gradecast client.
//!
//! This crate provides the foundational abstractions used across all other
//! Gradecast crates, including:
//!
//! - Domain models (report cards, course grades, assignments)
//! - The outcome taxonomy returned to callers
//! - Error types
//! - Trait definitions for portal client implementations
//!
//! ## Key Types
//!
//! ### Session
//! - [`SessionToken`] - Opaque bearer credential for the portal
//!
//! ### Report Types
//! - [`ReportCard`] - Structured result of a successful fetch
//! - [`CourseGrade`] - One course entry with an optional posted grade
//! - [`Assignment`] - Per-assignment breakdown for a course
//! - [`Grade`] - Numeric or letter grade value
//! - [`GradingPeriod`] - Grading period covered by a report
//!
//! ### Outcomes
//! - [`ReportOutcome`] - Tagged result crossing the boundary back to callers

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Session
    SessionToken,
    // Report types
    Assignment,
    CourseGrade,
    Grade,
    GradingPeriod,
    ReportCard,
    // Outcomes
    ReportOutcome,
};

// Re-export traits
pub use traits::GradePortal;
