//! Check command - probe session liveness without fetching grades.

use anyhow::Result;
use tracing::info;

use gradecast_core::GradePortal;

use crate::commands::build_client;
use crate::{Cli, ExitCode, OutputFormat};

/// Runs the check command.
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    let (client, session) = build_client(cli)?;

    info!("Checking session liveness");
    let valid = client.validate_session(&session).await?;

    if cli.format == OutputFormat::Json {
        println!(r#"{{"session_valid":{valid}}}"#);
    } else if valid {
        println!("Session is live.");
    } else {
        println!("Session has expired. Sign in to the portal again.");
    }

    Ok(if valid {
        ExitCode::Success
    } else {
        ExitCode::AuthRequired
    })
}
