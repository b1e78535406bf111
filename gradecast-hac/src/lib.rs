// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Gradecast HAC
//!
//! Home Access Center (HAC) portal integration.
//!
//! HAC is a third-party school-records portal. It is scraped, not called
//! through an API: its markup and session behavior are an unstable
//! external contract, so this crate is built around classifying every
//! way a request can go sideways.
//!
//! The pieces, leaf first:
//!
//! - [`classify`] - Pure decision table mapping raw responses onto the
//!   outcome taxonomy
//! - [`parser`] - HTML parsing for the report-card and classwork pages,
//!   isolated here so markup changes touch one module
//! - [`session`] - Liveness check for an opaque session token
//! - [`client`] - The [`HacClient`] façade request handlers call
//!
//! Every operation returns a [`gradecast_core::ReportOutcome`]; nothing
//! propagates as an unhandled fault past the façade.

pub mod classify;
pub mod client;
pub mod error;
pub mod parser;
pub mod session;

pub use classify::Disposition;
pub use client::HacClient;
pub use error::HacError;
pub use session::SessionValidator;
