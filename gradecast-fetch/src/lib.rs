// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Gradecast Fetch
//!
//! HTTP transport for Gradecast portal requests.
//!
//! This crate wraps `reqwest` with the behavior every portal request
//! needs:
//!
//! - A bounded timeout on every request, so a stalled portal classifies
//!   as an upstream failure instead of hanging the caller
//! - Redirects pinned to `Policy::none()`: HAC portals answer an expired
//!   session with a redirect to the login page, and that redirect is the
//!   signal the classifier branches on, so it must never be followed
//! - Cookie-based session authentication
//! - Request/response tracing
//!
//! The crate knows nothing about report cards or HTML; it returns raw
//! responses and transport errors for the layer above to classify.

pub mod client;
pub mod error;

pub use client::HttpClient;
pub use error::FetchError;
