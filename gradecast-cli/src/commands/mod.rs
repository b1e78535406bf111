//! CLI command implementations.

pub mod check;
pub mod classwork;
pub mod config;
pub mod report;

use std::time::Duration;

use gradecast_core::SessionToken;
use gradecast_hac::HacClient;

use crate::config::{self as cfg, Config};
use crate::Cli;

/// Builds the client and session from config, flags, and environment.
pub fn build_client(cli: &Cli) -> anyhow::Result<(HacClient, SessionToken)> {
    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.base_url.as_deref())?;
    let session = SessionToken::new(cfg::resolve_session(cli.session.as_deref())?);

    let client = HacClient::with_timeout(
        &base_url,
        Duration::from_secs(config.portal.timeout_secs),
    )?;
    Ok((client, session))
}
