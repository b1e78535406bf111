//! Classwork command - fetch the per-assignment breakdown.

use anyhow::Result;
use tracing::info;

use crate::commands::build_client;
use crate::commands::report::{exit_code_for, print_outcome};
use crate::{Cli, ExitCode};

/// Runs the classwork command.
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    let (client, session) = build_client(cli)?;

    info!("Fetching classwork");
    let outcome = client.get_classwork(&session).await;

    print_outcome(&outcome, cli)?;
    Ok(exit_code_for(&outcome))
}
